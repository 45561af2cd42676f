//! The Notifier - lazily bound sender capability.
//!
//! Every command, mediator and proxy carries a [`Notifier`]. The framework
//! binds it to a core when the object is registered (or, for commands,
//! constructed for execution); until then any attempt to send or reach the
//! facade fails with [`CoreError::UnboundNotifier`]. Resolving the facade
//! goes through the registry's get-instance path, so a bound notifier can
//! materialize its whole core on first use.

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use crate::core::{CoreKey, CoreRegistry};
use crate::error::{CoreError, CoreResult};
use crate::notification::Payload;
use crate::patterns::facade::Facade;

/// A notifier's attachment to one core: the registry that owns the core
/// plus the core key. Held weakly so cores can be torn down while bound
/// objects still exist.
#[derive(Clone)]
pub struct Binding {
    registry: Weak<CoreRegistry>,
    key: CoreKey,
}

impl Binding {
    pub(crate) fn new(registry: Weak<CoreRegistry>, key: CoreKey) -> Self {
        Self { registry, key }
    }
}

/// Exposes the [`Notifier`] an object carries.
///
/// This is the seam the registries bind through: anything registered with
/// a Model, View or Controller implements it.
pub trait Notifiable: Send + Sync {
    /// The object's notifier.
    fn notifier(&self) -> &Notifier;
}

/// Sender capability, unbound until the framework attaches it to a core.
pub struct Notifier {
    binding: RwLock<Option<Binding>>,
}

impl Notifier {
    /// Create an unbound notifier.
    pub fn new() -> Self {
        Self {
            binding: RwLock::new(None),
        }
    }

    pub(crate) fn bind(&self, binding: Binding) {
        *self.binding.write() = Some(binding);
    }

    pub(crate) fn binding(&self) -> Option<Binding> {
        self.binding.read().clone()
    }

    /// Whether the notifier has been bound to a core.
    pub fn is_bound(&self) -> bool {
        self.binding.read().is_some()
    }

    /// The key of the core this notifier is bound to.
    pub fn key(&self) -> CoreResult<CoreKey> {
        self.binding()
            .map(|binding| binding.key)
            .ok_or(CoreError::UnboundNotifier)
    }

    /// Resolve the facade for the bound core, materializing the core if
    /// nothing has constructed it yet.
    pub fn facade(&self) -> CoreResult<Arc<Facade>> {
        let binding = self.binding().ok_or(CoreError::UnboundNotifier)?;
        let registry = binding
            .registry
            .upgrade()
            .ok_or(CoreError::RegistryDropped)?;
        Ok(registry.facade(&binding.key))
    }

    /// Build and broadcast a notification through the bound core's facade.
    pub fn send_notification(
        &self,
        name: &str,
        body: Option<Payload>,
        kind: Option<&str>,
    ) -> CoreResult<()> {
        let facade = self.facade()?;
        facade.send_notification(name, body, kind);
        Ok(())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
