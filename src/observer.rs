//! Observers - (callback, context) pairs invoked on dispatch.
//!
//! An [`Observer`] pairs a notification callback with a [`ContextId`], the
//! identity of the object that registered it. The context is compared for
//! removal and never invoked; callbacks are shared so observer lists can be
//! snapshotted cheaply before dispatch.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::notification::Notification;

/// Stable identity token for observer removal.
///
/// Derived from the allocation address of the registering `Arc`, so two
/// distinct objects never compare equal even when their contents do. The
/// token stays valid while the owning registry holds the `Arc` alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(usize);

impl ContextId {
    /// Identity of a shared object.
    pub fn of<T: ?Sized>(target: &Arc<T>) -> Self {
        Self(Arc::as_ptr(target) as *const () as usize)
    }

    pub(crate) fn of_weak<T>(target: &Weak<T>) -> Self {
        Self(Weak::as_ptr(target) as *const () as usize)
    }
}

/// A registered notification callback with the identity of its registrant.
#[derive(Clone)]
pub struct Observer {
    notify: Arc<dyn Fn(&Notification) + Send + Sync>,
    context: ContextId,
}

impl Observer {
    /// Wrap a callback with the identity of the interested object.
    pub fn new(
        notify: impl Fn(&Notification) + Send + Sync + 'static,
        context: ContextId,
    ) -> Self {
        Self {
            notify: Arc::new(notify),
            context,
        }
    }

    /// Invoke the callback with a notification.
    pub fn notify_observer(&self, notification: &Notification) {
        (self.notify)(notification);
    }

    /// The identity the observer was registered under.
    pub fn notify_context(&self) -> ContextId {
        self.context
    }

    /// Whether this observer was registered by the given context.
    pub fn compare_notify_context(&self, context: ContextId) -> bool {
        self.context == context
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
