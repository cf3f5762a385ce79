//! Contract between the selection coordinator and the external renderer.
//!
//! Everything pixel-shaped — drawing, hit-testing, legend layout — lives on
//! the other side of [`ChartSurface`]. The coordinator only reads and
//! mutates the surface's ordered series list and asks for redraws; adapters
//! for real rendering systems implement this trait and forward pick events
//! to [`LineSelector::handle_pick`](crate::api::LineSelector::handle_pick).

mod memory_surface;

pub use memory_surface::MemorySurface;

use crate::core::{DataPoint, SeriesHandle, SeriesId};

/// Receipt for an active pick-event subscription.
///
/// Consumed by [`ChartSurface::cancel_picks`], so a subscription cannot be
/// cancelled twice. Deliberately neither `Clone` nor `Copy`.
#[derive(Debug, PartialEq, Eq)]
pub struct PickSubscription {
    id: u64,
}

impl PickSubscription {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

/// One chart surface of the external 2-D rendering system.
///
/// The surface owns the ordered series list; order is meaningful (legend and
/// z-order). A [`LineSelector`](crate::api::LineSelector) bound to a surface
/// is the sole mutator of that list by convention — interleaving direct
/// mutation with coordinator calls silently desynchronizes the coordinator's
/// clipboard and undo state. That precondition is documented, not enforced.
pub trait ChartSurface {
    /// Stable identity used in diagnostics.
    fn id(&self) -> &str;

    /// Current ordered series list.
    fn series(&self) -> &[SeriesHandle];

    /// Replaces the whole series list, preserving the given order.
    fn replace_series(&mut self, series: Vec<SeriesHandle>);

    /// Appends one series to the end of the list.
    fn push_series(&mut self, series: SeriesHandle);

    /// Removes the series with the given id. Returns `false` when no series
    /// with that id is present.
    fn remove_series(&mut self, id: SeriesId) -> bool;

    /// Creates a new renderable series with the given sample data and label,
    /// appends it to the list, and returns its handle.
    fn create_series(&mut self, data: Vec<DataPoint>, label: &str) -> SeriesHandle;

    /// Marks one series pickable with the given tolerance in pixels, or not
    /// pickable when `tolerance` is `None`. Returns `false` when no series
    /// with that id is present.
    fn set_pickable(&mut self, id: SeriesId, tolerance: Option<f64>) -> bool;

    /// Starts delivering pick events for this surface.
    fn subscribe_picks(&mut self) -> PickSubscription;

    /// Stops delivering pick events for the given subscription. Returns
    /// `false` when the subscription was not active.
    fn cancel_picks(&mut self, subscription: PickSubscription) -> bool;

    /// Number of currently active pick subscriptions.
    fn active_pick_subscriptions(&self) -> usize;

    /// Asks the renderer to repaint this surface on the next opportunity.
    ///
    /// Implementations must regenerate an attached, visible legend as part
    /// of the same repaint.
    fn request_redraw(&mut self);

    fn legend_attached(&self) -> bool;

    fn legend_visible(&self) -> bool;
}
