//! The View - mediator registry and notification dispatch for one core.
//!
//! Dispatch iterates a snapshot of the observer list, never the live list:
//! a callback may remove itself, register new observers or broadcast again
//! while dispatch for the same name is still running, and every observer
//! present when the broadcast started must fire exactly once.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

use crate::core::registry::{self, CoreKey, CoreRegistry};
use crate::error::CoreResult;
use crate::notification::Notification;
use crate::observer::{ContextId, Observer};
use crate::patterns::{Binding, Mediator};

struct MediatorEntry {
    mediator: Arc<dyn Mediator>,
    /// Interests captured once at registration; removal replays this list
    /// instead of asking the mediator again.
    interests: Vec<String>,
    context: ContextId,
}

/// Registry of mediators and per-name observer lists for one core.
pub struct View {
    key: CoreKey,
    registry: Weak<CoreRegistry>,
    mediators: DashMap<String, MediatorEntry>,
    observers: DashMap<String, Vec<Observer>>,
}

impl View {
    /// Construct the View for `key` directly.
    ///
    /// Fails with [`CoreError::AlreadyConstructed`] when a View already
    /// exists for the key; use [`CoreRegistry::view`] to share one.
    ///
    /// [`CoreError::AlreadyConstructed`]: crate::error::CoreError::AlreadyConstructed
    pub fn new(registry: &Arc<CoreRegistry>, key: impl Into<CoreKey>) -> CoreResult<Arc<Self>> {
        let key = key.into();
        registry::insert_new(&registry.views, "view", key.clone(), || {
            Self::construct(registry, key.clone())
        })
    }

    pub(crate) fn construct(registry: &Arc<CoreRegistry>, key: CoreKey) -> Arc<Self> {
        Arc::new(Self {
            key,
            registry: Arc::downgrade(registry),
            mediators: DashMap::new(),
            observers: DashMap::new(),
        })
    }

    /// The core key this View belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append an observer to the list for `name`.
    ///
    /// Append order is delivery order.
    pub fn register_observer(&self, name: &str, observer: Observer) {
        self.observers
            .entry(name.to_string())
            .or_default()
            .push(observer);
    }

    /// Broadcast a notification to every observer of its name.
    ///
    /// The observer list is snapshotted before the first callback runs;
    /// structural changes made by callbacks affect later broadcasts only.
    pub fn notify_observers(&self, notification: &Notification) {
        let snapshot = match self.observers.get(notification.name()) {
            Some(list) => list.value().clone(),
            None => return,
        };
        trace!(
            key = %self.key,
            name = %notification.name(),
            observers = snapshot.len(),
            "dispatching notification"
        );
        for observer in &snapshot {
            observer.notify_observer(notification);
        }
    }

    /// Remove the observer registered under `name` by `context`.
    ///
    /// At most one observer is removed (there is one per context per name
    /// by construction). An emptied list is dropped from the map entirely.
    pub fn remove_observer(&self, name: &str, context: ContextId) {
        let emptied = match self.observers.get_mut(name) {
            Some(mut list) => {
                if let Some(idx) = list
                    .iter()
                    .position(|observer| observer.compare_notify_context(context))
                {
                    list.remove(idx);
                }
                list.is_empty()
            }
            None => false,
        };
        if emptied {
            self.observers.remove_if(name, |_, list| list.is_empty());
        }
    }

    /// Register a mediator and subscribe it to its interests.
    ///
    /// Silently ignored when the name is taken; call
    /// [`remove_mediator`](Self::remove_mediator) first to replace.
    /// Otherwise: bind the mediator's notifier, store it, query
    /// `list_notification_interests` once, register a single observer
    /// wrapping `handle_notification` under every interest, then call
    /// `on_register`.
    pub fn register_mediator(&self, mediator: Arc<dyn Mediator>) {
        let name = mediator.mediator_name().to_string();
        let context = ContextId::of(&mediator);
        match self.mediators.entry(name.clone()) {
            Entry::Occupied(_) => return,
            Entry::Vacant(slot) => {
                mediator
                    .notifier()
                    .bind(Binding::new(self.registry.clone(), self.key.clone()));
                slot.insert(MediatorEntry {
                    mediator: mediator.clone(),
                    interests: Vec::new(),
                    context,
                });
            }
        }

        // User code (the interests query, the hook) runs outside the
        // mediator table's entry lock.
        let interests = mediator.list_notification_interests();
        debug!(
            key = %self.key,
            mediator = %name,
            interests = interests.len(),
            "registered mediator"
        );
        if !interests.is_empty() {
            let target = mediator.clone();
            let observer =
                Observer::new(move |note| target.handle_notification(note), context);
            for interest in &interests {
                self.register_observer(interest, observer.clone());
            }
            if let Some(mut entry) = self.mediators.get_mut(&name) {
                entry.interests = interests;
            }
        }
        mediator.on_register();
    }

    /// Look up a mediator by name.
    pub fn retrieve_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        self.mediators.get(name).map(|entry| entry.mediator.clone())
    }

    /// Whether a mediator is registered under `name`.
    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediators.contains_key(name)
    }

    /// Remove and return the mediator registered under `name`.
    ///
    /// Unsubscribes its observer from every interest, drops the entry and
    /// calls `on_remove`. Safe to call on an unknown name.
    pub fn remove_mediator(&self, name: &str) -> Option<Arc<dyn Mediator>> {
        let (interests, context) = {
            let entry = self.mediators.get(name)?;
            (entry.interests.clone(), entry.context)
        };
        for interest in &interests {
            self.remove_observer(interest, context);
        }
        let (_, entry) = self.mediators.remove(name)?;
        debug!(key = %self.key, mediator = %name, "removed mediator");
        entry.mediator.on_remove();
        Some(entry.mediator)
    }
}
