//! Proxies - named data holders registered with a Model.

use crate::notification::Payload;
use crate::patterns::notifier::Notifiable;

/// A named holder of a piece of the application's data.
///
/// Methods take `&self`; a proxy that mutates its data owns the interior
/// mutability for it. The notifier is bound before `on_register` runs, so
/// a proxy may broadcast from inside the hook.
pub trait Proxy: Notifiable {
    /// The name this proxy registers under.
    fn proxy_name(&self) -> &str;

    /// The data held by this proxy, if any.
    fn data(&self) -> Option<Payload> {
        None
    }

    /// Replace the data held by this proxy.
    fn set_data(&self, _data: Payload) {}

    /// Called by the Model after registration completes.
    fn on_register(&self) {}

    /// Called by the Model after removal completes.
    fn on_remove(&self) {}
}
