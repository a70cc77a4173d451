//! Mailbox search filtering and index remapping.
//!
//! The search box narrows the message table to rows whose From or Subject
//! contain the query text. [`FilteredView`] owns the mapping between
//! positions in the narrowed table and indices into the backing row list,
//! so selection and deletion can always be expressed in source indices.

use crate::domain::MessageSummary;

/// A normalized search query.
///
/// Matching is case-insensitive and fixed-string: the query is compared as
/// a literal substring, never interpreted as a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    lowered: String,
}

impl FilterQuery {
    /// Creates a query from raw search-box text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            lowered: text.as_ref().to_lowercase(),
        }
    }

    /// Creates a query from optional search-box text.
    ///
    /// An absent query behaves like an empty one and matches every row.
    pub fn from_optional(text: Option<&str>) -> Self {
        text.map(Self::new).unwrap_or_default()
    }

    /// Whether this query matches every row.
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Checks whether a row stays visible under this query.
    ///
    /// A row matches when the query occurs in its From or Subject field.
    pub fn matches(&self, row: &MessageSummary) -> bool {
        if self.lowered.is_empty() {
            return true;
        }
        row.from.to_lowercase().contains(&self.lowered)
            || row.subject.to_lowercase().contains(&self.lowered)
    }
}

/// The visible subset of the message table under a search query.
///
/// Row order follows the backing list; filtering never resorts. The view
/// is a snapshot: rebuild it whenever the rows or the query change.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    // Source indices of visible rows, always ascending.
    visible: Vec<usize>,
}

impl FilteredView {
    /// Builds the view for a row snapshot and query.
    pub fn build(rows: &[MessageSummary], query: &FilterQuery) -> Self {
        let visible: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| query.matches(row))
            .map(|(index, _)| index)
            .collect();

        tracing::debug!(
            total = rows.len(),
            visible = visible.len(),
            "rebuilt filtered view"
        );

        Self { visible }
    }

    /// Rebuilds the view in place.
    pub fn refresh(&mut self, rows: &[MessageSummary], query: &FilterQuery) {
        *self = Self::build(rows, query);
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether no rows are visible.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Maps a position in the visible table to its backing row index.
    pub fn source_index(&self, visible: usize) -> Option<usize> {
        self.visible.get(visible).copied()
    }

    /// Maps a backing row index to its position in the visible table.
    ///
    /// Returns `None` when the row is filtered out.
    pub fn visible_index(&self, source: usize) -> Option<usize> {
        // `visible` is ascending by construction.
        self.visible.binary_search(&source).ok()
    }

    /// Iterates the backing indices of visible rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().copied()
    }
}
