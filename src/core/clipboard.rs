use indexmap::IndexMap;
use tracing::debug;

use crate::core::series::SeriesHandle;
use crate::core::types::SeriesId;
use crate::error::{SelectorError, SelectorResult};

/// Ordered, duplicate-free collection of selected series.
///
/// Insertion order is preserved and significant: positional bulk-attribute
/// assignment and paste both walk the clipboard front to back. Membership is
/// identity-based via [`SeriesId`], so two series with identical labels and
/// data are still distinct entries.
#[derive(Debug, Default)]
pub struct Clipboard {
    entries: IndexMap<SeriesId, SeriesHandle>,
}

impl Clipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series unless it is already present.
    ///
    /// Returns `true` when the series was added; a duplicate add is a
    /// reported no-op, not an error.
    pub fn add(&mut self, handle: SeriesHandle) -> bool {
        let (id, label) = {
            let series = handle.borrow();
            (series.id(), series.label().to_owned())
        };
        if self.entries.contains_key(&id) {
            debug!(id = id.raw(), label = %label, "series already in clipboard, skipping");
            return false;
        }
        self.entries.insert(id, handle);
        debug!(id = id.raw(), label = %label, "added series to clipboard");
        true
    }

    /// Removes and returns the most recently added entry.
    pub fn remove_last(&mut self) -> SelectorResult<SeriesHandle> {
        self.entries
            .pop()
            .map(|(_, handle)| handle)
            .ok_or(SelectorError::EmptyClipboard)
    }

    /// Removes and returns the oldest entry (batch-deletion order).
    pub fn remove_first(&mut self) -> SelectorResult<SeriesHandle> {
        self.entries
            .shift_remove_index(0)
            .map(|(_, handle)| handle)
            .ok_or(SelectorError::EmptyClipboard)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: SeriesId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Ordered snapshot of the current entries.
    #[must_use]
    pub fn handles(&self) -> Vec<SeriesHandle> {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesHandle> {
        self.entries.values()
    }
}
