//! Domain layer types for the mailbox view.
//!
//! This module contains the plain data types the rest of the crate works
//! over: message summaries and headers as read from the backing store, and
//! the public-key identifiers that address contacts.

mod message;
mod types;

pub use message::{MessageHeader, MessageStatus, MessageSummary};
pub use types::KeyId;
