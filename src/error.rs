//! Unified error handling for corebus.
//!
//! Fatal conditions (duplicate core construction, use of an unbound
//! notifier) are typed errors raised synchronously to the caller.
//! "Not found" conditions are never errors: lookups return `Option`
//! and removals of unknown names are silent no-ops.

use thiserror::Error;

use crate::core::CoreKey;

/// Errors raised by the core registries and the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A registry of this kind already exists for the key. Raised only by
    /// direct construction; the get-instance path returns the existing
    /// instance instead.
    #[error("{kind} instance for key {key:?} is already constructed")]
    AlreadyConstructed {
        /// Registry kind ("model", "view", "controller" or "facade").
        kind: &'static str,
        /// The offending core key.
        key: CoreKey,
    },

    /// A notifier was asked to send or resolve its facade before it was
    /// bound to a core.
    #[error("notifier is not bound to a core yet")]
    UnboundNotifier,

    /// The core registry behind a binding has been dropped.
    #[error("core registry has been dropped")]
    RegistryDropped,
}

impl CoreError {
    /// Static error code for structured-log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyConstructed { .. } => "already_constructed",
            Self::UnboundNotifier => "unbound_notifier",
            Self::RegistryDropped => "registry_dropped",
        }
    }
}

/// Result type for fallible core operations.
pub type CoreResult<T> = Result<T, CoreError>;
