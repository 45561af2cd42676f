//! Commands - one-shot units of business logic.
//!
//! A command is constructed fresh by the Controller for every notification
//! it handles, bound to the dispatching core, executed once and dropped.
//! [`MacroCommand`] composes sub-commands executed FIFO with the same
//! notification.

use std::sync::Arc;

use crate::notification::Notification;
use crate::patterns::notifier::{Notifiable, Notifier};

/// A unit of business logic invoked with the notification that triggered
/// it. The notifier is bound before `execute` runs.
pub trait Command: Notifiable {
    /// Fulfill the use-case initiated by the notification.
    fn execute(&self, notification: &Notification);
}

/// Produces a fresh command instance per dispatched notification.
pub type CommandFactory = Arc<dyn Fn() -> Box<dyn Command> + Send + Sync>;

/// A command that runs an ordered list of sub-commands.
///
/// Each sub-command is instantiated from its factory, bound to the same
/// core as the macro itself, and executed with the original notification,
/// in the order the factories were added.
pub struct MacroCommand {
    notifier: Notifier,
    sub_commands: Vec<CommandFactory>,
}

impl MacroCommand {
    /// Create a macro with no sub-commands.
    pub fn new() -> Self {
        Self {
            notifier: Notifier::new(),
            sub_commands: Vec::new(),
        }
    }

    /// Append a sub-command factory. Sub-commands execute FIFO.
    pub fn add_sub_command<F>(&mut self, factory: F)
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        self.sub_commands.push(Arc::new(factory));
    }
}

impl Default for MacroCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifiable for MacroCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Command for MacroCommand {
    fn execute(&self, notification: &Notification) {
        let binding = self.notifier.binding();
        for factory in &self.sub_commands {
            let command = factory();
            if let Some(binding) = &binding {
                command.notifier().bind(binding.clone());
            }
            command.execute(notification);
        }
    }
}
