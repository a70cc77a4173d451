//! Mailbox operations over the backing message store.
//!
//! The [`MailboxService`] performs what the toolbar and table of a mailbox
//! view trigger: opening a row in the editor, deriving reply/forward
//! drafts, and deleting the selected rows. The backing store, address
//! book, editor window, and confirmation prompt are all collaborator
//! traits implemented by the host application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::domain::{KeyId, MessageHeader, MessageSummary};
use crate::services::composer_service::{compose, DraftSeed, ReplyMode};
use crate::services::filter_service::FilteredView;

/// Errors that can occur during mailbox operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailboxError {
    #[error("no message selected")]
    NoSelection,

    #[error("{0} messages selected, expected exactly one")]
    MultipleSelection(usize),

    #[error("row index out of bounds: {0}")]
    OutOfBounds(usize),

    #[error("store error: {0}")]
    Store(String),
}

/// Result type for mailbox operations.
pub type Result<T> = std::result::Result<T, MailboxError>;

/// Which mailbox folder a view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderKind {
    /// Received messages.
    Inbox,
    /// Messages the user has sent.
    Sent,
    /// Unsent drafts.
    Drafts,
}

/// Backing store of messages for one folder.
pub trait MessageStore: Send + Sync {
    /// Snapshot of the rows shown in the table, in source order.
    fn rows(&self) -> Result<Vec<MessageSummary>>;

    /// Removes the row at a source index.
    fn remove_row(&self, source_index: usize) -> Result<()>;

    /// Fetches the full message behind a source index.
    fn full_message(&self, source_index: usize) -> Result<MessageHeader>;
}

/// Maps public keys to contact names for display.
pub trait AddressBook: Send + Sync {
    /// The contact name registered for a key, if any.
    fn name_for(&self, key: &KeyId) -> Option<String>;
}

/// The editor window that receives a pre-filled draft.
#[cfg_attr(test, automock)]
pub trait DraftEditor: Send + Sync {
    /// Opens the editor with the given seed.
    ///
    /// `editing_draft` is true when re-opening a stored draft rather than
    /// starting a new reply or forward.
    fn open(&self, seed: DraftSeed, editing_draft: bool);
}

/// Asks the user to confirm a destructive action.
#[cfg_attr(test, automock)]
pub trait ConfirmPrompt: Send + Sync {
    /// Whether the user agreed to delete `count` messages.
    fn confirm_delete(&self, count: usize) -> bool;
}

/// Service driving one mailbox folder view.
pub struct MailboxService<S, B, E, P>
where
    S: MessageStore,
    B: AddressBook,
    E: DraftEditor,
    P: ConfirmPrompt,
{
    folder: FolderKind,
    store: S,
    address_book: B,
    editor: E,
    prompt: P,
}

impl<S, B, E, P> MailboxService<S, B, E, P>
where
    S: MessageStore,
    B: AddressBook,
    E: DraftEditor,
    P: ConfirmPrompt,
{
    /// Creates a service for one folder.
    pub fn new(folder: FolderKind, store: S, address_book: B, editor: E, prompt: P) -> Self {
        Self {
            folder,
            store,
            address_book,
            editor,
            prompt,
        }
    }

    /// The folder this service operates on.
    pub fn folder(&self) -> FolderKind {
        self.folder
    }

    /// Snapshot of the folder's rows, in source order.
    pub fn rows(&self) -> Result<Vec<MessageSummary>> {
        self.store.rows()
    }

    /// Resolves a key to its address-book name, falling back to the raw key.
    pub fn display_name(&self, key: &KeyId) -> String {
        self.address_book
            .name_for(key)
            .unwrap_or_else(|| key.to_string())
    }

    /// Opens the editor with a reply or forward derived from the selected
    /// message. Requires exactly one selected row.
    pub fn reply(&self, view: &FilteredView, selection: &[usize], mode: ReplyMode) -> Result<()> {
        let source = self.selected_source(view, selection)?;
        let header = self.store.full_message(source)?;
        let seed = compose(&header, mode);

        tracing::debug!(mode = %mode, source, "opening editor with derived draft");
        self.editor.open(seed, false);
        Ok(())
    }

    /// Opens the message behind a visible row in the editor, e.g. on
    /// double-click. In the Drafts folder this re-opens the draft for
    /// editing rather than starting a new message.
    pub fn open_row(&self, view: &FilteredView, visible: usize) -> Result<()> {
        let source = view
            .source_index(visible)
            .ok_or(MailboxError::OutOfBounds(visible))?;
        let header = self.store.full_message(source)?;
        let editing_draft = self.folder == FolderKind::Drafts;

        self.editor.open(DraftSeed::from_header(&header), editing_draft);
        Ok(())
    }

    /// Deletes the selected rows after confirmation.
    ///
    /// A zero-row selection is a no-op and shows no prompt; a declined
    /// prompt removes nothing. Rows are removed in descending source order
    /// so earlier removals never invalidate the remaining indices.
    ///
    /// Returns the number of rows removed.
    pub fn delete(&self, view: &FilteredView, selection: &[usize]) -> Result<usize> {
        if selection.is_empty() {
            return Ok(0);
        }

        let mut sources = Vec::with_capacity(selection.len());
        for &visible in selection {
            sources.push(
                view.source_index(visible)
                    .ok_or(MailboxError::OutOfBounds(visible))?,
            );
        }
        sources.sort_unstable();
        sources.dedup();

        if !self.prompt.confirm_delete(sources.len()) {
            tracing::debug!(count = sources.len(), "deletion cancelled at prompt");
            return Ok(0);
        }

        for &source in sources.iter().rev() {
            self.store.remove_row(source)?;
        }

        tracing::info!(removed = sources.len(), "deleted selected messages");
        Ok(sources.len())
    }

    fn selected_source(&self, view: &FilteredView, selection: &[usize]) -> Result<usize> {
        match selection {
            [] => Err(MailboxError::NoSelection),
            [visible] => view
                .source_index(*visible)
                .ok_or(MailboxError::OutOfBounds(*visible)),
            many => Err(MailboxError::MultipleSelection(many.len())),
        }
    }
}
