//! Message domain types.
//!
//! Represents the per-row summary shown in the mailbox table and the full
//! message header fetched when a row is opened or replied to. Both are
//! read-only snapshots owned by the backing store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::KeyId;

/// Read state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    /// Received and not yet opened.
    Unread,
    /// Received and opened.
    Read,
    /// Unsent draft.
    Draft,
    /// Sent by the current user.
    Sent,
}

/// One row of the mailbox table.
///
/// An immutable snapshot of the metadata the table displays; the full
/// message is fetched separately when needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Sender display string.
    pub from: String,
    /// Recipient display string.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// When the message was sent.
    pub date_sent: DateTime<Utc>,
    /// When the message arrived.
    pub date_received: DateTime<Utc>,
    /// Read state.
    pub status: MessageStatus,
    /// Whether the message carries file attachments.
    pub has_attachments: bool,
    /// Whether the message carries a coin attachment.
    pub has_money: bool,
    /// Whether the message carries an embedded chat request.
    pub has_chat: bool,
}

impl MessageSummary {
    /// Whether the row should render in the unread style.
    pub fn is_unread(&self) -> bool {
        self.status == MessageStatus::Unread
    }
}

/// Full header of a stored message.
///
/// Fetched from the backing store when a row is opened, replied to, or
/// forwarded. Recipient lists hold public-key identifiers in the order the
/// sender listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// Sender's public key.
    pub from_key: KeyId,
    /// Primary recipient keys.
    pub to_list: Vec<KeyId>,
    /// Carbon copy recipient keys.
    pub cc_list: Vec<KeyId>,
}
