//! Mailbox view state management.
//!
//! Toolkit-free state for one mailbox view: the folder being shown, the
//! search text, the set of selected rows, and what the preview pane should
//! display. The host widget reads this state after every event and renders
//! accordingly.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::services::{FilterQuery, FilteredView, FolderKind};

/// Columns the mailbox table can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Read-state marker.
    Status,
    /// Attachment marker.
    Attachment,
    /// Sender display string.
    From,
    /// Recipient display string.
    To,
    /// Subject line.
    Subject,
    /// When the message was sent.
    DateSent,
    /// When the message arrived.
    DateReceived,
    /// Coin attachment marker. Never shown.
    Money,
    /// Chat request marker. Never shown.
    Chat,
}

/// Visible columns for one folder, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Columns to render, left to right.
    pub visible: Vec<Column>,
}

impl ColumnLayout {
    /// The layout a folder shows by default.
    ///
    /// Outgoing folders put the recipient where incoming folders put the
    /// sender, and show the sent date instead of the received date. The
    /// Money and Chat columns are hidden everywhere.
    pub fn for_folder(folder: FolderKind) -> Self {
        let visible = match folder {
            FolderKind::Inbox => vec![
                Column::Attachment,
                Column::From,
                Column::To,
                Column::Subject,
                Column::DateReceived,
            ],
            FolderKind::Sent => vec![
                Column::Status,
                Column::Attachment,
                Column::To,
                Column::From,
                Column::Subject,
                Column::DateSent,
            ],
            FolderKind::Drafts => vec![
                Column::Attachment,
                Column::To,
                Column::From,
                Column::Subject,
                Column::DateSent,
            ],
        };
        Self { visible }
    }

    /// Whether a column is part of this layout.
    pub fn shows(&self, column: Column) -> bool {
        self.visible.contains(&column)
    }
}

/// What the preview pane should display for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewContent {
    /// Nothing selected; show the idle placeholder.
    Empty,
    /// One row selected; show the message at this source index.
    Single(usize),
    /// Several rows selected; show the multi-selection placeholder.
    Multiple { count: usize },
}

/// State of one mailbox view.
#[derive(Debug, Clone)]
pub struct MailboxState {
    /// Folder being shown.
    pub folder: FolderKind,
    /// Raw search-box text.
    pub search_text: String,
    /// Selected rows as visible indices, unordered.
    pub selected: Vec<usize>,
    /// Whether the preview pane is shown.
    pub preview_visible: bool,
}

impl MailboxState {
    /// Creates view state for a folder with default behavior.
    pub fn new(folder: FolderKind) -> Self {
        Self {
            folder,
            search_text: String::new(),
            selected: Vec::new(),
            preview_visible: true,
        }
    }

    /// Creates view state honoring the user's settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            folder: settings.behavior.default_folder,
            search_text: String::new(),
            selected: Vec::new(),
            preview_visible: settings.behavior.preview_visible,
        }
    }

    /// Replaces the search text, clearing the selection.
    ///
    /// Row identities shift under a new filter, so a stale selection of
    /// visible indices must not survive the query change.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.selected.clear();
    }

    /// The current search text as a filter query.
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(&self.search_text)
    }

    /// Replaces the selection with the given visible indices.
    pub fn set_selection(&mut self, visible: Vec<usize>) {
        self.selected = visible;
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// The single selected visible index, if exactly one row is selected.
    pub fn single_selection(&self) -> Option<usize> {
        match self.selected.as_slice() {
            [visible] => Some(*visible),
            _ => None,
        }
    }

    /// Whether reply, reply-all, and forward are available.
    ///
    /// The toolbar enables them only when exactly one row is selected.
    pub fn can_reply(&self) -> bool {
        self.selected.len() == 1
    }

    /// What the preview pane should display, given the current filter view.
    pub fn preview_content(&self, view: &FilteredView) -> PreviewContent {
        match self.selected.as_slice() {
            [] => PreviewContent::Empty,
            [visible] => match view.source_index(*visible) {
                Some(source) => PreviewContent::Single(source),
                None => PreviewContent::Empty,
            },
            many => PreviewContent::Multiple { count: many.len() },
        }
    }

    /// Shows or hides the preview pane.
    pub fn set_preview_visible(&mut self, visible: bool) {
        self.preview_visible = visible;
    }

    /// Switches to another folder, resetting search and selection.
    pub fn switch_folder(&mut self, folder: FolderKind) {
        self.folder = folder;
        self.search_text.clear();
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageStatus, MessageSummary};
    use chrono::Utc;

    fn row(from: &str, subject: &str) -> MessageSummary {
        MessageSummary {
            from: from.to_string(),
            to: "me".to_string(),
            subject: subject.to_string(),
            date_sent: Utc::now(),
            date_received: Utc::now(),
            status: MessageStatus::Read,
            has_attachments: false,
            has_money: false,
            has_chat: false,
        }
    }

    #[test]
    fn inbox_layout_hides_status_and_sent_date() {
        let layout = ColumnLayout::for_folder(FolderKind::Inbox);

        assert_eq!(
            layout.visible,
            vec![
                Column::Attachment,
                Column::From,
                Column::To,
                Column::Subject,
                Column::DateReceived,
            ]
        );
        assert!(!layout.shows(Column::Status));
        assert!(!layout.shows(Column::DateSent));
    }

    #[test]
    fn outgoing_layouts_swap_sender_and_recipient() {
        let sent = ColumnLayout::for_folder(FolderKind::Sent);
        let drafts = ColumnLayout::for_folder(FolderKind::Drafts);

        for layout in [&sent, &drafts] {
            let to = layout.visible.iter().position(|&c| c == Column::To).unwrap();
            let from = layout.visible.iter().position(|&c| c == Column::From).unwrap();
            assert!(to < from);
            assert!(layout.shows(Column::DateSent));
            assert!(!layout.shows(Column::DateReceived));
        }
        assert!(sent.shows(Column::Status));
        assert!(!drafts.shows(Column::Status));
    }

    #[test]
    fn money_and_chat_are_never_shown() {
        for folder in [FolderKind::Inbox, FolderKind::Sent, FolderKind::Drafts] {
            let layout = ColumnLayout::for_folder(folder);
            assert!(!layout.shows(Column::Money));
            assert!(!layout.shows(Column::Chat));
        }
    }

    #[test]
    fn reply_actions_require_exactly_one_selection() {
        let mut state = MailboxState::new(FolderKind::Inbox);
        assert!(!state.can_reply());

        state.set_selection(vec![0]);
        assert!(state.can_reply());
        assert_eq!(state.single_selection(), Some(0));

        state.set_selection(vec![0, 2]);
        assert!(!state.can_reply());
        assert_eq!(state.single_selection(), None);
    }

    #[test]
    fn preview_follows_selection() {
        let rows = vec![row("Alice", "one"), row("Bob", "two"), row("Alice", "three")];
        let view = FilteredView::build(&rows, &FilterQuery::new("alice"));
        let mut state = MailboxState::new(FolderKind::Inbox);

        assert_eq!(state.preview_content(&view), PreviewContent::Empty);

        // Visible row 1 is source row 2.
        state.set_selection(vec![1]);
        assert_eq!(state.preview_content(&view), PreviewContent::Single(2));

        state.set_selection(vec![0, 1]);
        assert_eq!(
            state.preview_content(&view),
            PreviewContent::Multiple { count: 2 }
        );
    }

    #[test]
    fn changing_search_text_clears_selection() {
        let mut state = MailboxState::new(FolderKind::Inbox);
        state.set_selection(vec![0, 1]);

        state.set_search_text("alice");
        assert!(state.selected.is_empty());
        assert_eq!(state.query(), FilterQuery::new("alice"));
    }

    #[test]
    fn switching_folder_resets_search_and_selection() {
        let mut state = MailboxState::new(FolderKind::Inbox);
        state.set_search_text("alice");
        state.set_selection(vec![0]);

        state.switch_folder(FolderKind::Drafts);
        assert_eq!(state.folder, FolderKind::Drafts);
        assert!(state.search_text.is_empty());
        assert!(state.selected.is_empty());
    }
}
