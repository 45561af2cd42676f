//! Pattern roles built on the core registries: facade, notifier, command,
//! mediator and proxy.

mod command;
mod facade;
mod mediator;
mod notifier;
mod proxy;

pub use command::{Command, CommandFactory, MacroCommand};
pub use facade::Facade;
pub use mediator::Mediator;
pub use notifier::{Notifiable, Notifier};
pub use proxy::Proxy;

pub(crate) use notifier::Binding;
