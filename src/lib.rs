//! # corebus
//!
//! Multi-core MVC registries with observer-based notification dispatch.
//!
//! A *core* is an isolated Model/View/Controller universe identified by a
//! [`CoreKey`] inside a [`CoreRegistry`]. Proxies hold data, mediators
//! coordinate presentation, commands carry business logic, and all three
//! talk to each other through named [`Notification`]s broadcast by the
//! core's [`Facade`]. Any number of cores coexist in one process without
//! interfering.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use corebus::{Command, CoreRegistry, Notifiable, Notification, Notifier};
//!
//! struct Double {
//!     notifier: Notifier,
//! }
//!
//! impl Notifiable for Double {
//!     fn notifier(&self) -> &Notifier {
//!         &self.notifier
//!     }
//! }
//!
//! impl Command for Double {
//!     fn execute(&self, notification: &Notification) {
//!         if let Some(value) = notification.body_as::<AtomicU64>() {
//!             value.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| Some(v * 2))
//!                 .ok();
//!         }
//!     }
//! }
//!
//! let registry = CoreRegistry::new();
//! let facade = registry.facade("app");
//!
//! facade.register_command("Double", || {
//!     Box::new(Double { notifier: Notifier::new() })
//! });
//!
//! let value = Arc::new(AtomicU64::new(32));
//! facade.send_notification("Double", Some(value.clone()), None);
//! assert_eq!(value.load(Ordering::SeqCst), 64);
//! ```
//!
//! ## Dispatch semantics
//!
//! Dispatch is synchronous and reentrant: observers run on the caller's
//! stack, in registration order, from a snapshot of the observer list, so
//! a handler may broadcast again or unregister itself mid-dispatch.
//! Registries are concurrent and may be driven from any thread.

#![warn(missing_docs)]

pub mod core;
pub mod error;
pub mod notification;
pub mod observer;
pub mod patterns;

pub use self::core::{Controller, CoreKey, CoreRegistry, Model, View};
pub use self::error::{CoreError, CoreResult};
pub use self::notification::{Notification, Payload};
pub use self::observer::{ContextId, Observer};
pub use self::patterns::{
    Command, CommandFactory, Facade, MacroCommand, Mediator, Notifiable, Notifier, Proxy,
};
