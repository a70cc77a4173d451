//! Presentation-facing state and event dispatch.
//!
//! The host widget owns the rendering; this module owns what it renders:
//! per-view state ([`MailboxState`], column layouts) and the event bus the
//! widget publishes user interactions on.

mod events;
mod state;

pub use events::{EventBus, EventHandler, MailboxEvent, SubscriberId};
pub use state::{Column, ColumnLayout, MailboxState, PreviewContent};
