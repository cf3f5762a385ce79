use tracing::{debug, warn};

use crate::error::SelectorResult;
use crate::surface::ChartSurface;

use super::{LineSelector, validation};

impl<S: ChartSurface> LineSelector<S> {
    /// Removes the series at the given list positions.
    ///
    /// The full list is snapshotted first so the deletion can be undone.
    /// Positions are matched in one pass over the current list; an index
    /// with no series behind it at removal time is simply ignored. Remaining
    /// series keep their relative order. One redraw for the whole batch.
    pub fn delete_by_indices(&mut self, indices: &[usize]) -> SelectorResult<()> {
        validation::require_indices(indices)?;
        self.history.snapshot(self.surface.series());

        let mut kept = Vec::with_capacity(self.surface.series().len());
        for (index, handle) in self.surface.series().iter().enumerate() {
            if indices.contains(&index) {
                debug!(index, label = %handle.borrow().label(), "deleted series");
            } else {
                kept.push(handle.clone());
            }
        }
        self.surface.replace_series(kept);
        self.redraw();
        Ok(())
    }

    /// Removes every series currently in the clipboard from the surface,
    /// first-in-clipboard first, draining the clipboard.
    ///
    /// Each removal tolerates the series already being gone from the list
    /// (logged and skipped). One snapshot before the batch, one redraw after.
    pub fn delete_selection(&mut self) {
        self.history.snapshot(self.surface.series());
        while let Ok(handle) = self.clipboard.remove_first() {
            let (id, label) = {
                let series = handle.borrow();
                (series.id(), series.label().to_owned())
            };
            if self.surface.remove_series(id) {
                debug!(id = id.raw(), label = %label, "deleted series");
            } else {
                warn!(id = id.raw(), label = %label, "series no longer on surface, skipping deletion");
            }
        }
        self.redraw();
    }

    /// Removes every series from the surface, one at a time, after one
    /// snapshot of the full list. One redraw at the end.
    pub fn delete_all(&mut self) {
        self.history.snapshot(self.surface.series());
        while let Some(handle) = self.surface.series().last().cloned() {
            let id = handle.borrow().id();
            self.surface.remove_series(id);
            debug!(id = id.raw(), label = %handle.borrow().label(), "deleted series");
        }
        self.redraw();
    }

    /// Restores the most recent snapshot as the surface's entire series
    /// list.
    ///
    /// This is a full-state rewind, not a selective reinsertion: it undoes
    /// any mutation of the list since that snapshot, not only the most
    /// recent deletion. Reports and returns `false` when there is nothing
    /// to undo.
    pub fn undo_last_delete(&mut self) -> bool {
        match self.history.rewind() {
            Ok(series) => {
                self.surface.replace_series(series);
                self.redraw();
                true
            }
            Err(_) => {
                debug!("no deletions to undo");
                false
            }
        }
    }

    /// Pops every retained snapshot, replacing the surface list each time,
    /// until the buffer is exhausted. Returns the number of snapshots
    /// applied.
    ///
    /// Because each pop replaces the list wholesale, the net effect is
    /// restoration of the oldest retained snapshot; intermediate states are
    /// transiently applied and overwritten within the same call.
    pub fn undo_all_delete(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(series) = self.history.rewind() {
            self.surface.replace_series(series);
            applied += 1;
        }
        if applied > 0 {
            self.redraw();
        } else {
            debug!("no deletions to undo");
        }
        applied
    }
}
