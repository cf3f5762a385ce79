use tracing::debug;

use crate::core::Series;
use crate::error::SelectorResult;
use crate::surface::ChartSurface;

use super::{LineSelector, validation};

impl<S: ChartSurface> LineSelector<S> {
    /// Adds the series at the given list positions to the clipboard, in the
    /// order the indices are supplied.
    ///
    /// The whole batch is validated against the current list bounds before
    /// the clipboard is touched. Re-selecting an already-selected series is
    /// a reported no-op.
    pub fn select_by_indices(&mut self, indices: &[usize]) -> SelectorResult<()> {
        validation::require_indices(indices)?;
        validation::check_index_bounds(indices, self.surface.series().len())?;

        for &index in indices {
            let handle = self.surface.series()[index].clone();
            self.clipboard.add(handle);
        }
        Ok(())
    }

    /// Adds every series for which the predicate returns `true`, walking the
    /// list in order so the clipboard preserves list order.
    pub fn select_where(&mut self, mut predicate: impl FnMut(&Series, usize) -> bool) {
        let matches: Vec<_> = self
            .surface
            .series()
            .iter()
            .enumerate()
            .filter(|(index, handle)| predicate(&handle.borrow(), *index))
            .map(|(_, handle)| handle.clone())
            .collect();
        for handle in matches {
            self.clipboard.add(handle);
        }
    }

    /// Selects every series currently on the surface.
    pub fn select_all(&mut self) {
        let handles: Vec<_> = self.surface.series().to_vec();
        for handle in handles {
            self.clipboard.add(handle);
        }
    }

    /// Empties the clipboard without touching the surface.
    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }

    /// Removes the most recently selected series from the clipboard.
    ///
    /// Undoing with an empty clipboard is a harmless caller mistake, so it
    /// is reported and returns `false` instead of failing.
    pub fn undo_last_selection(&mut self) -> bool {
        match self.clipboard.remove_last() {
            Ok(handle) => {
                debug!(label = %handle.borrow().label(), "removed series from clipboard");
                true
            }
            Err(_) => {
                debug!("no selections to undo");
                false
            }
        }
    }
}
