//! The core registry - keyed lookup for every core's Model, View,
//! Controller and Facade.
//!
//! A [`CoreRegistry`] is an explicit process-wide object: construct one at
//! startup, share the `Arc`, and every core (an isolated
//! Model+View+Controller+Facade universe) lives in its tables under a
//! [`CoreKey`]. The get-instance accessors construct lazily and race-free;
//! direct constructors (`Model::new` and friends) fail on duplicate keys.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

use crate::core::{Controller, Model, View};
use crate::error::{CoreError, CoreResult};
use crate::patterns::Facade;

/// Identifier scoping one isolated core.
pub type CoreKey = String;

/// Keyed registry of core instances.
///
/// Holds one table per registry kind. All tables are concurrent; the
/// check-and-construct critical section for a key covers one table only,
/// so constructing one kind may freely resolve another (a Controller
/// resolves its View, a Facade resolves the whole triad).
pub struct CoreRegistry {
    pub(crate) models: DashMap<CoreKey, Arc<Model>>,
    pub(crate) views: DashMap<CoreKey, Arc<View>>,
    pub(crate) controllers: DashMap<CoreKey, Arc<Controller>>,
    pub(crate) facades: DashMap<CoreKey, Arc<Facade>>,
}

impl CoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            models: DashMap::new(),
            views: DashMap::new(),
            controllers: DashMap::new(),
            facades: DashMap::new(),
        })
    }

    /// The Model for `key`, constructing it on first access.
    pub fn model(self: &Arc<Self>, key: &str) -> Arc<Model> {
        get_or_construct(&self.models, key, || Model::construct(self, key.to_string()))
    }

    /// The View for `key`, constructing it on first access.
    pub fn view(self: &Arc<Self>, key: &str) -> Arc<View> {
        get_or_construct(&self.views, key, || View::construct(self, key.to_string()))
    }

    /// The Controller for `key`, constructing it (and its View) on first
    /// access.
    pub fn controller(self: &Arc<Self>, key: &str) -> Arc<Controller> {
        get_or_construct(&self.controllers, key, || {
            Controller::construct(self, key.to_string())
        })
    }

    /// The Facade for `key`, constructing it (and the whole triad) on
    /// first access.
    pub fn facade(self: &Arc<Self>, key: &str) -> Arc<Facade> {
        get_or_construct(&self.facades, key, || {
            Facade::construct(self, key.to_string())
        })
    }

    /// Drop the Model for `key`. No-op when absent.
    pub fn remove_model(&self, key: &str) {
        self.models.remove(key);
    }

    /// Drop the View for `key`. No-op when absent.
    pub fn remove_view(&self, key: &str) {
        self.views.remove(key);
    }

    /// Drop the Controller for `key`. No-op when absent.
    pub fn remove_controller(&self, key: &str) {
        self.controllers.remove(key);
    }

    /// Whether a core (a Facade) exists for `key`.
    pub fn has_core(&self, key: &str) -> bool {
        self.facades.contains_key(key)
    }

    /// Remove the Model, View, Controller and Facade for `key`.
    ///
    /// After this returns no member of the core remains registered;
    /// subsequent accessors construct a fresh core. No-op when absent.
    pub fn remove_core(&self, key: &str) {
        self.models.remove(key);
        self.views.remove(key);
        self.controllers.remove(key);
        let removed = self.facades.remove(key).is_some();
        if removed {
            debug!(key = %key, "removed core");
        }
    }

    /// Drop every core. Intended for test isolation and shutdown.
    pub fn reset(&self) {
        self.models.clear();
        self.views.clear();
        self.controllers.clear();
        self.facades.clear();
    }
}

/// Get-instance: return the existing instance for `key`, or construct
/// exactly one under the table's entry lock.
fn get_or_construct<T>(
    map: &DashMap<CoreKey, Arc<T>>,
    key: &str,
    construct: impl FnOnce() -> Arc<T>,
) -> Arc<T> {
    // Fast path: read-only lookup.
    if let Some(existing) = map.get(key) {
        return existing.clone();
    }
    map.entry(key.to_string()).or_insert_with(construct).clone()
}

/// Direct construction: insert a fresh instance, or fail when the key is
/// occupied. Used by the public `new` constructors.
pub(crate) fn insert_new<T>(
    map: &DashMap<CoreKey, Arc<T>>,
    kind: &'static str,
    key: CoreKey,
    construct: impl FnOnce() -> Arc<T>,
) -> CoreResult<Arc<T>> {
    match map.entry(key.clone()) {
        Entry::Occupied(_) => Err(CoreError::AlreadyConstructed { kind, key }),
        Entry::Vacant(slot) => {
            let instance = construct();
            slot.insert(instance.clone());
            Ok(instance)
        }
    }
}
