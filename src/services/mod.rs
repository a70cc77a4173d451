//! Business services layer.
//!
//! This module contains the logic behind the mailbox view, kept free of
//! any widget toolkit.
//!
//! # Architecture
//!
//! Services sit between the presentation layer and the host application's
//! infrastructure:
//!
//! ```text
//! Presentation Layer (table widget, toolbar, events)
//!          |
//!          v
//!    Services Layer  <-- You are here
//!          |
//!          v
//! Host collaborators (message store, address book, editor window)
//! ```
//!
//! # Services Overview
//!
//! - [`FilterQuery`]/[`FilteredView`]: search filtering and visible↔source
//!   index remapping for the message table
//! - [`compose`]: reply/reply-all/forward draft derivation
//! - [`MailboxService`]: row opening, reply dispatch, and deletion over the
//!   collaborator traits

mod composer_service;
mod filter_service;
mod mailbox_service;

pub use composer_service::{compose, ComposeError, DraftSeed, ReplyMode};
pub use filter_service::{FilterQuery, FilteredView};
pub use mailbox_service::{
    AddressBook, ConfirmPrompt, DraftEditor, FolderKind, MailboxError, MailboxService,
    MessageStore,
};
