//! Integration tests for the facade surface: proxy CRUD, notification
//! plumbing and notifier binding.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::{LifecycleProxy, TallyCommand, TallyMediator};
use corebus::{CoreRegistry, Notifiable, Notification, Proxy};

#[test]
fn test_proxy_crud_through_facade() {
    let registry = CoreRegistry::new();
    let facade = registry.facade("app");
    let events = Arc::new(Mutex::new(Vec::new()));

    facade.register_proxy(LifecycleProxy::new("users", events.clone()));
    assert!(facade.has_proxy("users"));
    assert_eq!(
        facade.retrieve_proxy("users").unwrap().proxy_name(),
        "users"
    );
    assert!(facade.retrieve_proxy("missing").is_none());

    let removed = facade.remove_proxy("users").unwrap();
    assert_eq!(removed.proxy_name(), "users");
    assert!(!facade.has_proxy("users"));
    assert!(facade.remove_proxy("users").is_none());

    assert_eq!(
        *events.lock().unwrap(),
        vec!["users:register", "users:remove"]
    );
}

#[test]
fn test_proxy_data_round_trip() {
    let registry = CoreRegistry::new();
    let facade = registry.facade("app");
    let events = Arc::new(Mutex::new(Vec::new()));

    let proxy = LifecycleProxy::new("config", events);
    proxy.set_data(Arc::new("production".to_string()));
    facade.register_proxy(proxy);

    let held = facade.retrieve_proxy("config").unwrap();
    let data = held.data().unwrap();
    assert_eq!(
        data.downcast_ref::<String>().map(String::as_str),
        Some("production")
    );
}

#[test]
fn test_proxy_can_broadcast_from_on_register() {
    let registry = CoreRegistry::new();
    let facade = registry.facade("app");
    let events = Arc::new(Mutex::new(Vec::new()));
    let hits = Arc::new(AtomicUsize::new(0));

    facade.register_mediator(TallyMediator::new("listener", &["ProxyReady"], hits.clone()));
    facade.register_proxy(LifecycleProxy::announcing("db", events, "ProxyReady"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_send_notification_carries_body_and_kind() {
    let registry = CoreRegistry::new();
    let facade = registry.facade("app");
    let seen = Arc::new(Mutex::new(Vec::new()));

    let log = seen.clone();
    facade.register_command("Inspect", move || {
        let log = log.clone();
        Box::new(InspectCommand {
            log,
            notifier: corebus::Notifier::new(),
        })
    });

    facade.send_notification("Inspect", Some(Arc::new(41u32)), Some("probe"));
    facade.send_notification("Inspect", None, None);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            "body=41 kind=probe".to_string(),
            "body=? kind=-".to_string()
        ]
    );
}

#[test]
fn test_notify_observers_accepts_prebuilt_notification() {
    let registry = CoreRegistry::new();
    let facade = registry.facade("app");
    let hits = Arc::new(AtomicUsize::new(0));

    facade.register_mediator(TallyMediator::new("panel", &["Custom"], hits.clone()));

    let notification = Notification::new("Custom").with_kind("manual");
    facade.notify_observers(&notification);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_facade_notifier_is_bound_to_its_key() {
    let registry = CoreRegistry::new();
    let facade = registry.facade("app");
    let hits = Arc::new(AtomicUsize::new(0));

    facade.register_command("Echo", TallyCommand::factory(&hits));

    // The facade is itself a bound notifier.
    assert!(facade.notifier().is_bound());
    assert_eq!(facade.notifier().key().unwrap(), "app");
    facade
        .notifier()
        .send_notification("Echo", None, None)
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_registered_proxy_reaches_the_facade_lazily() {
    let registry = CoreRegistry::new();
    let events = Arc::new(Mutex::new(Vec::new()));

    // Register against a bare Model: no facade exists for this key yet.
    let model = registry.model("headless");
    let proxy = LifecycleProxy::new("store", events);
    model.register_proxy(proxy.clone());
    assert!(!registry.has_core("headless"));

    // Reaching the facade through the proxy's notifier materializes it.
    let facade = proxy.notifier().facade().unwrap();
    assert!(registry.has_core("headless"));
    assert_eq!(facade.key(), "headless");
    assert!(facade.has_proxy("store"));
}

// ----------------------------------------------------------------------------
// Local helpers
// ----------------------------------------------------------------------------

use corebus::{Command, Notifier};

/// Command that records the body and kind of what it receives.
struct InspectCommand {
    log: Arc<Mutex<Vec<String>>>,
    notifier: Notifier,
}

impl Notifiable for InspectCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Command for InspectCommand {
    fn execute(&self, notification: &Notification) {
        let body = match notification.body_as::<u32>() {
            Some(value) => value.to_string(),
            None => "?".to_string(),
        };
        let kind = notification.kind().unwrap_or("-");
        self.log
            .lock()
            .unwrap()
            .push(format!("body={body} kind={kind}"));
    }
}
