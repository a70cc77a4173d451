//! Reply and forward draft derivation.
//!
//! Turns the selected message's header into the initial content of a new
//! editor window: the prefixed subject, the recipient set, and the body
//! seed. The derivation is a pure function of the header and the chosen
//! mode; the editor window itself is opened by the mailbox service.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::{KeyId, MessageHeader};

/// Errors that can occur while interpreting compose requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// A reply-mode string from outside the crate was not recognized.
    #[error("unknown reply mode: {0}")]
    UnknownMode(String),
}

/// How the new draft relates to the selected message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    /// Answer the sender only.
    Reply,
    /// Answer the sender and every original To/Cc recipient.
    ReplyAll,
    /// Pass the message on to recipients chosen later.
    Forward,
}

impl FromStr for ReplyMode {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reply" => Ok(Self::Reply),
            "reply-all" | "reply_all" => Ok(Self::ReplyAll),
            "forward" => Ok(Self::Forward),
            other => Err(ComposeError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ReplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reply => "reply",
            Self::ReplyAll => "reply-all",
            Self::Forward => "forward",
        };
        write!(f, "{name}")
    }
}

/// Initial content for a new editor window.
///
/// Recipient lists behave as ordered sets: an identifier is never added
/// twice, and insertion order is kept so the editor shows recipients the
/// way the original message listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSeed {
    /// Pre-filled subject line.
    pub subject: String,
    /// Primary recipients.
    pub to: Vec<KeyId>,
    /// Carbon copy recipients.
    pub cc: Vec<KeyId>,
    /// Pre-filled body text.
    pub body: String,
}

impl DraftSeed {
    /// Re-opens a stored message as-is, e.g. a draft being edited.
    pub fn from_header(header: &MessageHeader) -> Self {
        let mut seed = Self {
            subject: header.subject.clone(),
            body: header.body.clone(),
            ..Self::default()
        };
        for key in &header.to_list {
            seed.add_to(key.clone());
        }
        for key in &header.cc_list {
            seed.add_cc(key.clone());
        }
        seed
    }

    fn add_to(&mut self, key: KeyId) {
        if !self.to.contains(&key) {
            self.to.push(key);
        }
    }

    fn add_cc(&mut self, key: KeyId) {
        if !self.cc.contains(&key) {
            self.cc.push(key);
        }
    }
}

/// Derives the draft seed for replying to or forwarding a message.
///
/// The body is carried over verbatim; no quoting or attribution line is
/// added. Reply-all keeps the current user's own key in the recipient set
/// when the original message listed it.
pub fn compose(header: &MessageHeader, mode: ReplyMode) -> DraftSeed {
    let subject = match mode {
        ReplyMode::Reply | ReplyMode::ReplyAll => format!("Re: {}", header.subject),
        ReplyMode::Forward => format!("Fwd: {}", header.subject),
    };

    let mut seed = DraftSeed {
        subject,
        body: header.body.clone(),
        ..DraftSeed::default()
    };

    match mode {
        ReplyMode::Reply => {
            seed.add_to(header.from_key.clone());
        }
        ReplyMode::ReplyAll => {
            seed.add_to(header.from_key.clone());
            for key in &header.to_list {
                seed.add_to(key.clone());
            }
            for key in &header.cc_list {
                seed.add_cc(key.clone());
            }
        }
        ReplyMode::Forward => {}
    }

    seed
}
