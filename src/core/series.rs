use std::cell::RefCell;
use std::rc::Rc;

use crate::core::style::SeriesStyle;
use crate::core::types::{DataPoint, SeriesId};

/// Shared reference to one series.
///
/// The surface list, clipboard, and snapshot buffer all hold clones of the
/// same handle; a series removed from its surface stays alive (and editable,
/// and pasteable) for as long as any clipboard or snapshot still refers to
/// it. Single-threaded by design.
pub type SeriesHandle = Rc<RefCell<Series>>;

/// One line series: stable identity, sample data, pick state, and style.
///
/// The underlying renderable entity is owned by the external rendering
/// system; this record is the coordination-side view of it.
#[derive(Debug, Clone)]
pub struct Series {
    id: SeriesId,
    data: Vec<DataPoint>,
    pick_tolerance: Option<f64>,
    pub style: SeriesStyle,
}

impl Series {
    #[must_use]
    pub fn new(data: Vec<DataPoint>, label: impl Into<String>) -> Self {
        Self {
            id: SeriesId::allocate(),
            data,
            pick_tolerance: None,
            style: SeriesStyle::labeled(label),
        }
    }

    #[must_use]
    pub fn into_handle(self) -> SeriesHandle {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.style.label
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Pick tolerance in pixels; `None` means the series is not pickable.
    #[must_use]
    pub fn pick_tolerance(&self) -> Option<f64> {
        self.pick_tolerance
    }

    pub fn set_pick_tolerance(&mut self, tolerance: Option<f64>) {
        self.pick_tolerance = tolerance;
    }

    #[must_use]
    pub fn is_pickable(&self) -> bool {
        self.pick_tolerance.is_some()
    }
}
