//! Event dispatch for the mailbox view.
//!
//! Replaces toolkit signal/slot wiring with explicit handler registration:
//! the presentation layer publishes [`MailboxEvent`]s on an [`EventBus`],
//! and interested components subscribe. Dispatch is synchronous; handlers
//! run before `publish` returns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::{FolderKind, ReplyMode};

/// Events flowing between the mailbox view's components.
#[derive(Debug, Clone)]
pub enum MailboxEvent {
    /// The search-box text changed.
    SearchChanged(String),
    /// The set of selected rows changed (visible indices).
    SelectionChanged(Vec<usize>),
    /// A row was activated, e.g. by double-click (visible index).
    RowActivated(usize),
    /// A reply, reply-all, or forward toolbar action fired.
    ReplyRequested(ReplyMode),
    /// The delete toolbar action fired.
    DeleteRequested,
    /// The preview pane was shown or hidden.
    PreviewToggled(bool),
    /// The view switched to another folder.
    FolderChanged(FolderKind),
}

/// Subscriber ID for unsubscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Event handler function type.
pub type EventHandler = Box<dyn Fn(&MailboxEvent) + Send + Sync>;

/// Event bus for publish-subscribe communication.
///
/// Allows components to publish events and subscribe to events they care
/// about. Handlers are invoked synchronously on the publishing thread.
pub struct EventBus {
    handlers: Arc<Mutex<HashMap<u64, EventHandler>>>,
    next_id: Arc<Mutex<u64>>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    /// Subscribe to all events.
    ///
    /// Returns a subscriber ID that can be used to unsubscribe.
    pub fn subscribe<F>(&self, handler: F) -> SubscriberId
    where
        F: Fn(&MailboxEvent) + Send + Sync + 'static,
    {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let mut handlers = self.handlers.lock().unwrap();
        handlers.insert(id, Box::new(handler));

        SubscriberId(id)
    }

    /// Unsubscribe from events.
    pub fn unsubscribe(&self, subscriber_id: SubscriberId) {
        let mut handlers = self.handlers.lock().unwrap();
        handlers.remove(&subscriber_id.0);
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: MailboxEvent) {
        let handlers = self.handlers.lock().unwrap();
        for handler in handlers.values() {
            handler(&event);
        }
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().unwrap().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            next_id: Arc::clone(&self.next_id),
        }
    }
}
