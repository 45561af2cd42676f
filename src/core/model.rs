//! The Model - named proxy registry for one core.

use dashmap::DashMap;
use std::sync::{Arc, Weak};
use tracing::debug;

use crate::core::registry::{self, CoreKey, CoreRegistry};
use crate::error::CoreResult;
use crate::patterns::{Binding, Proxy};

/// Registry of the data-access proxies for one core.
///
/// The Model exclusively owns the `name -> proxy` mapping. Registration
/// binds the proxy's notifier to this core before the `on_register` hook
/// runs, so a proxy may send notifications from inside the hook.
pub struct Model {
    key: CoreKey,
    registry: Weak<CoreRegistry>,
    proxies: DashMap<String, Arc<dyn Proxy>>,
}

impl Model {
    /// Construct the Model for `key` directly.
    ///
    /// Fails with [`CoreError::AlreadyConstructed`] when a Model already
    /// exists for the key; use [`CoreRegistry::model`] to share one.
    ///
    /// [`CoreError::AlreadyConstructed`]: crate::error::CoreError::AlreadyConstructed
    pub fn new(registry: &Arc<CoreRegistry>, key: impl Into<CoreKey>) -> CoreResult<Arc<Self>> {
        let key = key.into();
        registry::insert_new(&registry.models, "model", key.clone(), || {
            Self::construct(registry, key.clone())
        })
    }

    pub(crate) fn construct(registry: &Arc<CoreRegistry>, key: CoreKey) -> Arc<Self> {
        Arc::new(Self {
            key,
            registry: Arc::downgrade(registry),
            proxies: DashMap::new(),
        })
    }

    /// The core key this Model belongs to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Register a proxy under its name.
    ///
    /// Binds the proxy's notifier to this core, stores it (replacing any
    /// previous holder of the name without ceremony), then calls
    /// `on_register`.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) {
        proxy
            .notifier()
            .bind(Binding::new(self.registry.clone(), self.key.clone()));
        let name = proxy.proxy_name().to_string();
        debug!(key = %self.key, proxy = %name, "registered proxy");
        self.proxies.insert(name, proxy.clone());
        proxy.on_register();
    }

    /// Look up a proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.proxies.get(name).map(|entry| entry.value().clone())
    }

    /// Whether a proxy is registered under `name`.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxies.contains_key(name)
    }

    /// Remove and return the proxy registered under `name`.
    ///
    /// The proxy is unmapped first and its `on_remove` hook runs after,
    /// outside any map lock. Returns `None` (and calls nothing) when the
    /// name is unknown.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        let (_, proxy) = self.proxies.remove(name)?;
        debug!(key = %self.key, proxy = %name, "removed proxy");
        proxy.on_remove();
        Some(proxy)
    }
}
