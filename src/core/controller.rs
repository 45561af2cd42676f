//! The Controller - command dispatch for one core.
//!
//! The Controller maps notification names to command factories and keeps
//! itself subscribed with the View: the observer for a name is created the
//! first time a factory is registered for it, survives any number of
//! factory replacements, and is torn down only by `remove_command`.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

use crate::core::registry::{self, CoreKey, CoreRegistry};
use crate::core::view::View;
use crate::error::CoreResult;
use crate::notification::Notification;
use crate::observer::{ContextId, Observer};
use crate::patterns::{Binding, Command, CommandFactory};

/// Registry of command factories for one core.
pub struct Controller {
    key: CoreKey,
    registry: Weak<CoreRegistry>,
    view: Arc<View>,
    commands: DashMap<String, CommandFactory>,
    /// Self-reference; its address doubles as the observer context.
    me: Weak<Controller>,
}

impl Controller {
    /// Construct the Controller for `key` directly.
    ///
    /// Fails with [`CoreError::AlreadyConstructed`] when a Controller
    /// already exists for the key; use [`CoreRegistry::controller`] to
    /// share one.
    ///
    /// [`CoreError::AlreadyConstructed`]: crate::error::CoreError::AlreadyConstructed
    pub fn new(registry: &Arc<CoreRegistry>, key: impl Into<CoreKey>) -> CoreResult<Arc<Self>> {
        let key = key.into();
        registry::insert_new(&registry.controllers, "controller", key.clone(), || {
            Self::construct(registry, key.clone())
        })
    }

    pub(crate) fn construct(registry: &Arc<CoreRegistry>, key: CoreKey) -> Arc<Self> {
        let view = registry.view(&key);
        Arc::new_cyclic(|me| Self {
            key,
            registry: Arc::downgrade(registry),
            view,
            commands: DashMap::new(),
            me: me.clone(),
        })
    }

    /// The core key this Controller belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn context_id(&self) -> ContextId {
        ContextId::of_weak(&self.me)
    }

    /// Map a notification name to a command factory.
    ///
    /// The first registration for a name subscribes this Controller with
    /// the View; later registrations only swap the factory.
    pub fn register_command<F>(&self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        match self.commands.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                debug!(key = %self.key, name = %name, "replaced command factory");
                slot.insert(Arc::new(factory));
            }
            Entry::Vacant(slot) => {
                let me = self.me.clone();
                self.view.register_observer(
                    name,
                    Observer::new(
                        move |note| {
                            if let Some(controller) = me.upgrade() {
                                controller.execute_command(note);
                            }
                        },
                        self.context_id(),
                    ),
                );
                debug!(key = %self.key, name = %name, "registered command");
                slot.insert(Arc::new(factory));
            }
        }
    }

    /// Execute the command mapped to the notification's name, if any.
    ///
    /// A fresh command instance is built per invocation and bound to this
    /// core before `execute`. Unmapped names are ignored.
    pub fn execute_command(&self, notification: &Notification) {
        let factory = match self.commands.get(notification.name()) {
            Some(entry) => entry.value().clone(),
            None => return,
        };
        trace!(key = %self.key, name = %notification.name(), "executing command");
        let command = factory();
        command
            .notifier()
            .bind(Binding::new(self.registry.clone(), self.key.clone()));
        command.execute(notification);
    }

    /// Whether a command is mapped to `name`.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Unmap `name` and drop the View subscription created for it.
    ///
    /// No-op when no command is mapped.
    pub fn remove_command(&self, name: &str) {
        if self.commands.remove(name).is_some() {
            self.view.remove_observer(name, self.context_id());
            debug!(key = %self.key, name = %name, "removed command");
        }
    }
}
