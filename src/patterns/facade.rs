//! The Facade - single front door to one core.
//!
//! A Facade aggregates the Model, View and Controller for its key and
//! exposes their operations as one surface. `send_notification` is the
//! ordinary way application code triggers dispatch; `notify_observers`
//! stays public for pre-built notifications.

use std::sync::Arc;

use crate::core::registry::{self, CoreKey, CoreRegistry};
use crate::core::{Controller, Model, View};
use crate::error::CoreResult;
use crate::notification::{Notification, Payload};
use crate::patterns::command::Command;
use crate::patterns::mediator::Mediator;
use crate::patterns::notifier::{Binding, Notifiable, Notifier};
use crate::patterns::proxy::Proxy;

/// Aggregated front door for one core.
pub struct Facade {
    key: CoreKey,
    model: Arc<Model>,
    view: Arc<View>,
    controller: Arc<Controller>,
    notifier: Notifier,
}

impl Facade {
    /// Construct the Facade for `key` directly.
    ///
    /// Fails with [`CoreError::AlreadyConstructed`] when a Facade already
    /// exists for the key; use [`CoreRegistry::facade`] to share one.
    ///
    /// [`CoreError::AlreadyConstructed`]: crate::error::CoreError::AlreadyConstructed
    pub fn new(registry: &Arc<CoreRegistry>, key: impl Into<CoreKey>) -> CoreResult<Arc<Self>> {
        let key = key.into();
        registry::insert_new(&registry.facades, "facade", key.clone(), || {
            Self::construct(registry, key.clone())
        })
    }

    pub(crate) fn construct(registry: &Arc<CoreRegistry>, key: CoreKey) -> Arc<Self> {
        let controller = registry.controller(&key);
        let model = registry.model(&key);
        let view = registry.view(&key);
        let notifier = Notifier::new();
        notifier.bind(Binding::new(Arc::downgrade(registry), key.clone()));
        Arc::new(Self {
            key,
            model,
            view,
            controller,
            notifier,
        })
    }

    /// The core key this Facade fronts.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The Model of this core.
    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    /// The View of this core.
    pub fn view(&self) -> &Arc<View> {
        &self.view
    }

    /// The Controller of this core.
    pub fn controller(&self) -> &Arc<Controller> {
        &self.controller
    }

    /// Map a notification name to a command factory.
    pub fn register_command<F>(&self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        self.controller.register_command(name, factory);
    }

    /// Unmap a notification name from its command.
    pub fn remove_command(&self, name: &str) {
        self.controller.remove_command(name);
    }

    /// Whether a command is mapped to `name`.
    pub fn has_command(&self, name: &str) -> bool {
        self.controller.has_command(name)
    }

    /// Register a proxy with the Model.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    /// Look up a proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.retrieve_proxy(name)
    }

    /// Remove and return the proxy registered under `name`.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.model.remove_proxy(name)
    }

    /// Whether a proxy is registered under `name`.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    /// Register a mediator with the View.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    /// Look up a mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.retrieve_mediator(name)
    }

    /// Remove and return the mediator registered under `name`.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.view.remove_mediator(name)
    }

    /// Whether a mediator is registered under `name`.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    /// Build a notification and broadcast it through the View.
    pub fn send_notification(&self, name: &str, body: Option<Payload>, kind: Option<&str>) {
        let mut notification = Notification::new(name);
        notification.set_body(body);
        notification.set_kind(kind.map(str::to_string));
        self.notify_observers(&notification);
    }

    /// Broadcast a pre-built notification through the View.
    pub fn notify_observers(&self, notification: &Notification) {
        self.view.notify_observers(notification);
    }
}

impl Notifiable for Facade {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
