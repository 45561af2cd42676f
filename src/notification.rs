//! Notifications - the messages broadcast through a core.
//!
//! A [`Notification`] carries a name (fixed at construction), an optional
//! body and an optional kind discriminator. Observers subscribe by name;
//! the body is an opaque shared payload the receiver downcasts.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque shared payload carried in a notification body or held by a
/// proxy/mediator. Receivers downcast it to the concrete type they expect.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// A named message broadcast to the observers subscribed to its name.
///
/// The name is immutable after construction; body and kind stay settable
/// so a notification can be enriched before it is dispatched.
pub struct Notification {
    name: String,
    body: Option<Payload>,
    kind: Option<String>,
}

impl Notification {
    /// Create a notification with no body or kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    /// Attach a body, builder style.
    #[must_use]
    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a kind discriminator, builder style.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The notification name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body, if any.
    pub fn body(&self) -> Option<&Payload> {
        self.body.as_ref()
    }

    /// Replace the body.
    pub fn set_body(&mut self, body: Option<Payload>) {
        self.body = body;
    }

    /// Downcast the body to a concrete type.
    ///
    /// Returns `None` when there is no body or it holds a different type.
    pub fn body_as<T: Any>(&self) -> Option<&T> {
        self.body.as_ref().and_then(|body| body.downcast_ref::<T>())
    }

    /// The kind discriminator, if any.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Replace the kind discriminator.
    pub fn set_kind(&mut self, kind: Option<String>) {
        self.kind = kind;
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(kind) = &self.kind {
            write!(f, " ({kind})")?;
        }
        if self.body.is_some() {
            write!(f, " [body]")?;
        }
        Ok(())
    }
}
