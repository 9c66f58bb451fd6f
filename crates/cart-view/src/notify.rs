//! Shopper notification port.

use std::cell::RefCell;

/// Delivers acknowledgment messages to the shopper.
pub trait Notifier {
    /// Show a message.
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Notifier that keeps every message, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// A notifier with no messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message shown so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
