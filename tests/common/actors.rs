//! Test actors: proxies, mediators and commands with observable behavior.

// Not every test binary exercises every actor.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use corebus::{Command, Mediator, Notifiable, Notification, Notifier, Payload, Proxy};

/// A proxy that records its lifecycle hooks and can broadcast a
/// notification from inside `on_register`.
pub struct LifecycleProxy {
    name: String,
    data: Mutex<Option<Payload>>,
    events: Arc<Mutex<Vec<String>>>,
    announce: Option<String>,
    notifier: Notifier,
}

impl LifecycleProxy {
    pub fn new(name: &str, events: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            data: Mutex::new(None),
            events,
            announce: None,
            notifier: Notifier::new(),
        })
    }

    /// Broadcast `notification` from inside `on_register`.
    pub fn announcing(name: &str, events: Arc<Mutex<Vec<String>>>, notification: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            data: Mutex::new(None),
            events,
            announce: Some(notification.to_string()),
            notifier: Notifier::new(),
        })
    }
}

impl Notifiable for LifecycleProxy {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Proxy for LifecycleProxy {
    fn proxy_name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> Option<Payload> {
        self.data.lock().unwrap().clone()
    }

    fn set_data(&self, data: Payload) {
        *self.data.lock().unwrap() = Some(data);
    }

    fn on_register(&self) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:register", self.name));
        if let Some(notification) = &self.announce {
            self.notifier
                .send_notification(notification, None, None)
                .expect("proxy must be bound inside on_register");
        }
    }

    fn on_remove(&self) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{}:remove", self.name));
    }
}

/// A mediator that counts the notifications it handles.
///
/// Optionally removes itself from its core on the first notification, for
/// exercising mutation of the observer list mid-dispatch.
pub struct TallyMediator {
    name: String,
    interests: Vec<String>,
    hits: Arc<AtomicUsize>,
    remove_self_on_notify: bool,
    events: Arc<Mutex<Vec<String>>>,
    notifier: Notifier,
}

impl TallyMediator {
    pub fn new(name: &str, interests: &[&str], hits: Arc<AtomicUsize>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            hits,
            remove_self_on_notify: false,
            events: Arc::new(Mutex::new(Vec::new())),
            notifier: Notifier::new(),
        })
    }

    /// A mediator whose handler removes it from the core's view.
    pub fn self_removing(name: &str, interests: &[&str], hits: Arc<AtomicUsize>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            hits,
            remove_self_on_notify: true,
            events: Arc::new(Mutex::new(Vec::new())),
            notifier: Notifier::new(),
        })
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifiable for TallyMediator {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Mediator for TallyMediator {
    fn mediator_name(&self) -> &str {
        &self.name
    }

    fn list_notification_interests(&self) -> Vec<String> {
        self.interests.clone()
    }

    fn handle_notification(&self, notification: &Notification) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.events
            .lock()
            .unwrap()
            .push(format!("handled:{}", notification.name()));
        if self.remove_self_on_notify {
            let facade = self
                .notifier
                .facade()
                .expect("mediator must be bound while registered");
            facade.remove_mediator(&self.name);
        }
    }

    fn on_register(&self) {
        self.events.lock().unwrap().push("register".to_string());
    }

    fn on_remove(&self) {
        self.events.lock().unwrap().push("remove".to_string());
    }
}

/// Value object for the doubling scenario.
pub struct QueryVo {
    pub input: u64,
    pub result: u64,
}

/// A command that doubles `QueryVo::input` into `QueryVo::result`.
pub struct DoublingCommand {
    notifier: Notifier,
}

impl DoublingCommand {
    pub fn factory() -> Box<dyn Command> {
        Box::new(Self {
            notifier: Notifier::new(),
        })
    }
}

impl Notifiable for DoublingCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Command for DoublingCommand {
    fn execute(&self, notification: &Notification) {
        if let Some(vo) = notification.body_as::<Mutex<QueryVo>>() {
            let mut vo = vo.lock().unwrap();
            vo.result = 2 * vo.input;
        }
    }
}

/// A command that counts its executions.
pub struct TallyCommand {
    hits: Arc<AtomicUsize>,
    notifier: Notifier,
}

impl TallyCommand {
    pub fn factory(hits: &Arc<AtomicUsize>) -> impl Fn() -> Box<dyn Command> + Send + Sync + use<> {
        let hits = hits.clone();
        move || {
            Box::new(TallyCommand {
                hits: hits.clone(),
                notifier: Notifier::new(),
            })
        }
    }
}

impl Notifiable for TallyCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Command for TallyCommand {
    fn execute(&self, _notification: &Notification) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}
