//! Coordinator facade: one [`LineSelector`] per chart surface.
//!
//! The selector owns the surface handle, the selection clipboard, and the
//! bounded undo history, and is the sole mutator of the surface's series
//! list by convention. Operation groups live in per-concern submodules the
//! same way the engine facade splits its controllers.

mod attributes;
mod deletion;
mod interactive;
mod ordering;
mod paste;
mod selection;
mod selector_snapshot;
mod validation;

pub use interactive::InteractiveMode;
pub use selector_snapshot::{
    SELECTOR_SNAPSHOT_JSON_SCHEMA_V1, SelectorSnapshot, SelectorSnapshotJsonContractV1,
    SeriesSummary,
};

use std::fmt;

use crate::core::{Clipboard, DEFAULT_SNAPSHOT_CAPACITY, SnapshotBuffer};
use crate::error::{SelectorError, SelectorResult};
use crate::surface::{ChartSurface, PickSubscription};

/// Tuning knobs for a [`LineSelector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Maximum number of undo snapshots retained before the oldest is evicted.
    pub snapshot_capacity: usize,
    /// Pick tolerance in pixels handed to the renderer when interactive mode
    /// marks series pickable.
    pub pick_radius: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            snapshot_capacity: DEFAULT_SNAPSHOT_CAPACITY,
            pick_radius: 5.0,
        }
    }
}

impl SelectorConfig {
    #[must_use]
    pub fn with_snapshot_capacity(mut self, capacity: usize) -> Self {
        self.snapshot_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_pick_radius(mut self, radius: f64) -> Self {
        self.pick_radius = radius;
        self
    }

    fn validate(self) -> SelectorResult<()> {
        if self.snapshot_capacity == 0 {
            return Err(SelectorError::InvalidArgument(
                "snapshot capacity must be >= 1".to_owned(),
            ));
        }
        if !self.pick_radius.is_finite() || self.pick_radius <= 0.0 {
            return Err(SelectorError::InvalidArgument(
                "pick radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Selection, deletion, reordering, restyling, and paste coordination for
/// the line series of one chart surface.
pub struct LineSelector<S: ChartSurface> {
    surface: S,
    clipboard: Clipboard,
    history: SnapshotBuffer,
    mode: InteractiveMode,
    subscription: Option<PickSubscription>,
    config: SelectorConfig,
}

impl<S: ChartSurface> LineSelector<S> {
    /// Binds a selector to `surface` with the default configuration.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::assemble(surface, SelectorConfig::default())
    }

    /// Binds a selector to `surface` with an explicit configuration.
    pub fn with_config(surface: S, config: SelectorConfig) -> SelectorResult<Self> {
        config.validate()?;
        Ok(Self::assemble(surface, config))
    }

    /// Shared constructor for validated configurations.
    fn assemble(surface: S, config: SelectorConfig) -> Self {
        Self {
            surface,
            clipboard: Clipboard::new(),
            history: SnapshotBuffer::with_capacity(config.snapshot_capacity),
            mode: InteractiveMode::Off,
            subscription: None,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct mutable surface access.
    ///
    /// Mutating the series list through this escape hatch desynchronizes the
    /// selector's clipboard and undo state from reality; callers own that
    /// risk.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.surface.series().len()
    }

    #[must_use]
    pub fn clipboard_len(&self) -> usize {
        self.clipboard.len()
    }

    #[must_use]
    pub fn snapshot_depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn interactive_mode(&self) -> InteractiveMode {
        self.mode
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.mode != InteractiveMode::Off
    }

    /// Requests one repaint of the bound surface. The surface regenerates an
    /// attached, visible legend as part of the same request.
    pub(super) fn redraw(&mut self) {
        self.surface.request_redraw();
    }

    /// Human-readable summary of the selector state: surface identity,
    /// interactive mode, indexed series list, indexed clipboard, undo depth.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<S: ChartSurface> fmt::Display for LineSelector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LineSelector (")?;
        writeln!(f, "    surface: {}", self.surface.id())?;
        writeln!(f, "    interactive: {}", self.mode)?;
        writeln!(f, "    series:")?;
        for (index, handle) in self.surface.series().iter().enumerate() {
            writeln!(f, "        {index}: {}", handle.borrow().label())?;
        }
        writeln!(f, "    clipboard:")?;
        for (index, handle) in self.clipboard.iter().enumerate() {
            writeln!(f, "        {index}: {}", handle.borrow().label())?;
        }
        writeln!(
            f,
            "    undo depth: {} of {}",
            self.history.len(),
            self.history.capacity()
        )?;
        write!(f, ")")
    }
}
