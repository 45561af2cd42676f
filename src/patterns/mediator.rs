//! Mediators - named view coordinators subscribed to notifications.

use crate::notification::{Notification, Payload};
use crate::patterns::notifier::Notifiable;

/// A named coordinator for an opaque view component.
///
/// Registered with a View under its name; its interests are queried once
/// at registration and one observer wrapping `handle_notification` is
/// subscribed under each of them. Methods take `&self`: a mediator owns
/// whatever interior mutability its state needs, which keeps self-removal
/// from inside `handle_notification` deadlock-free.
pub trait Mediator: Notifiable {
    /// The name this mediator registers under.
    fn mediator_name(&self) -> &str;

    /// The opaque component this mediator fronts, if any.
    fn view_component(&self) -> Option<Payload> {
        None
    }

    /// Notification names this mediator wants to receive. Queried once,
    /// at registration.
    fn list_notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    /// Handle a notification for one of the declared interests.
    fn handle_notification(&self, _notification: &Notification) {}

    /// Called by the View after registration completes.
    fn on_register(&self) {}

    /// Called by the View after removal completes.
    fn on_remove(&self) {}
}
