use serde::{Deserialize, Serialize};

use crate::core::SeriesHandle;
use crate::error::{SelectorError, SelectorResult};
use crate::surface::ChartSurface;

use super::{InteractiveMode, LineSelector};

pub const SELECTOR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable one-line summary of a series as seen by the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub id: u64,
    pub label: String,
    pub samples: usize,
    pub visible: bool,
}

impl SeriesSummary {
    fn of(handle: &SeriesHandle) -> Self {
        let series = handle.borrow();
        Self {
            id: series.id().raw(),
            label: series.label().to_owned(),
            samples: series.data().len(),
            visible: series.style.visible,
        }
    }
}

/// Serializable deterministic selector state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSnapshot {
    pub surface_id: String,
    pub interactive_mode: InteractiveMode,
    pub series: Vec<SeriesSummary>,
    pub clipboard: Vec<SeriesSummary>,
    pub undo_depth: usize,
    pub undo_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SelectorSnapshot,
}

impl SelectorSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SelectorResult<String> {
        let payload = SelectorSnapshotJsonContractV1 {
            schema_version: SELECTOR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SelectorError::InvalidArgument(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot payload and the versioned contract
    /// wrapper; unknown schema versions are rejected.
    pub fn from_json_compat_str(input: &str) -> SelectorResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SelectorSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SelectorSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SelectorError::InvalidArgument(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SELECTOR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SelectorError::InvalidArgument(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<S: ChartSurface> LineSelector<S> {
    /// Captures the current selector state as a serializable snapshot.
    #[must_use]
    pub fn selector_snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            surface_id: self.surface.id().to_owned(),
            interactive_mode: self.mode,
            series: self.surface.series().iter().map(SeriesSummary::of).collect(),
            clipboard: self.clipboard.iter().map(SeriesSummary::of).collect(),
            undo_depth: self.history.len(),
            undo_capacity: self.history.capacity(),
        }
    }
}
