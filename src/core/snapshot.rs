use std::collections::VecDeque;

use crate::core::series::SeriesHandle;
use crate::error::{SelectorError, SelectorResult};

pub const DEFAULT_SNAPSHOT_CAPACITY: usize = 25;

/// Bounded history ring of prior series-list states.
///
/// Snapshots are shallow: each entry clones the list of handles, not the
/// series behind them. Once the ring is full the oldest snapshot is evicted,
/// and `rewind` pops most-recent-first, so the buffer behaves as an undo
/// stack with a bounded memory footprint.
#[derive(Debug)]
pub struct SnapshotBuffer {
    capacity: usize,
    snapshots: VecDeque<Vec<SeriesHandle>>,
}

impl Default for SnapshotBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SNAPSHOT_CAPACITY)
    }
}

impl SnapshotBuffer {
    /// Creates a buffer holding at most `capacity` snapshots (min 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            snapshots: VecDeque::new(),
        }
    }

    /// Stores a shallow copy of the given list, evicting the oldest snapshot
    /// first when the buffer is full.
    pub fn snapshot(&mut self, series: &[SeriesHandle]) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(series.to_vec());
    }

    /// Removes and returns the most recently stored snapshot.
    pub fn rewind(&mut self) -> SelectorResult<Vec<SeriesHandle>> {
        self.snapshots.pop_back().ok_or(SelectorError::EmptyBuffer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
