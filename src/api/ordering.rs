use crate::error::SelectorResult;
use crate::surface::ChartSurface;

use super::{LineSelector, validation};

impl<S: ChartSurface> LineSelector<S> {
    /// Moves the series at position `i` to position `permutation[i]`.
    ///
    /// The permutation must be a bijection over `0..n` for the current
    /// series count `n`; anything else is rejected before the list is
    /// touched. Useful for putting a legend in a saner order.
    pub fn reorder_lines(&mut self, permutation: &[usize]) -> SelectorResult<()> {
        let series = self.surface.series();
        validation::check_permutation(permutation, series.len())?;

        let mut placed: Vec<_> = permutation
            .iter()
            .copied()
            .zip(series.iter().cloned())
            .collect();
        placed.sort_by_key(|(target, _)| *target);

        let reordered = placed.into_iter().map(|(_, handle)| handle).collect();
        self.surface.replace_series(reordered);
        self.redraw();
        Ok(())
    }
}
