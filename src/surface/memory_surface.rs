use crate::core::{DataPoint, Series, SeriesHandle, SeriesId};
use crate::surface::{ChartSurface, PickSubscription};

/// In-memory surface used by tests and headless callers.
///
/// No pixels are produced; instead every externally observable request
/// (redraws, legend regenerations, subscriptions) is counted so the
/// coordinator's contracts can be asserted against a real implementation of
/// the trait.
#[derive(Debug, Default)]
pub struct MemorySurface {
    id: String,
    series: Vec<SeriesHandle>,
    legend_attached: bool,
    legend_visible: bool,
    redraw_requests: usize,
    legend_regenerations: usize,
    next_subscription_id: u64,
    active_subscriptions: Vec<u64>,
}

impl MemorySurface {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Attaches a legend to the surface, visible or hidden.
    #[must_use]
    pub fn with_legend(mut self, visible: bool) -> Self {
        self.legend_attached = true;
        self.legend_visible = visible;
        self
    }

    /// Convenience plot call: creates a labeled series from sample data.
    pub fn add_line(&mut self, data: Vec<DataPoint>, label: &str) -> SeriesHandle {
        self.create_series(data, label)
    }

    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    #[must_use]
    pub fn legend_regenerations(&self) -> usize {
        self.legend_regenerations
    }

    fn position_of(&self, id: SeriesId) -> Option<usize> {
        self.series
            .iter()
            .position(|handle| handle.borrow().id() == id)
    }
}

impl ChartSurface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn series(&self) -> &[SeriesHandle] {
        &self.series
    }

    fn replace_series(&mut self, series: Vec<SeriesHandle>) {
        self.series = series;
    }

    fn push_series(&mut self, series: SeriesHandle) {
        self.series.push(series);
    }

    fn remove_series(&mut self, id: SeriesId) -> bool {
        match self.position_of(id) {
            Some(position) => {
                self.series.remove(position);
                true
            }
            None => false,
        }
    }

    fn create_series(&mut self, data: Vec<DataPoint>, label: &str) -> SeriesHandle {
        let handle = Series::new(data, label).into_handle();
        self.series.push(handle.clone());
        handle
    }

    fn set_pickable(&mut self, id: SeriesId, tolerance: Option<f64>) -> bool {
        match self.position_of(id) {
            Some(position) => {
                self.series[position].borrow_mut().set_pick_tolerance(tolerance);
                true
            }
            None => false,
        }
    }

    fn subscribe_picks(&mut self) -> PickSubscription {
        self.next_subscription_id += 1;
        self.active_subscriptions.push(self.next_subscription_id);
        PickSubscription::new(self.next_subscription_id)
    }

    fn cancel_picks(&mut self, subscription: PickSubscription) -> bool {
        match self
            .active_subscriptions
            .iter()
            .position(|&id| id == subscription.id())
        {
            Some(position) => {
                self.active_subscriptions.remove(position);
                true
            }
            None => false,
        }
    }

    fn active_pick_subscriptions(&self) -> usize {
        self.active_subscriptions.len()
    }

    fn request_redraw(&mut self) {
        if self.legend_attached && self.legend_visible {
            self.legend_regenerations += 1;
        }
        self.redraw_requests += 1;
    }

    fn legend_attached(&self) -> bool {
        self.legend_attached
    }

    fn legend_visible(&self) -> bool {
        self.legend_visible
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySurface;
    use crate::core::DataPoint;
    use crate::surface::ChartSurface;

    #[test]
    fn redraw_regenerates_visible_legend_only() {
        let mut plain = MemorySurface::new("plain");
        plain.request_redraw();
        assert_eq!(plain.redraw_requests(), 1);
        assert_eq!(plain.legend_regenerations(), 0);

        let mut legended = MemorySurface::new("legended").with_legend(true);
        legended.request_redraw();
        assert_eq!(legended.legend_regenerations(), 1);

        let mut hidden = MemorySurface::new("hidden").with_legend(false);
        hidden.request_redraw();
        assert_eq!(hidden.legend_regenerations(), 0);
    }

    #[test]
    fn remove_series_reports_missing_ids() {
        let mut surface = MemorySurface::new("chart");
        let handle = surface.add_line(vec![DataPoint::new(0.0, 0.0)], "a");
        let id = handle.borrow().id();

        assert!(surface.remove_series(id));
        assert!(!surface.remove_series(id));
        assert!(surface.series().is_empty());
    }

    #[test]
    fn subscriptions_are_cancelled_by_receipt() {
        let mut surface = MemorySurface::new("chart");
        let first = surface.subscribe_picks();
        let second = surface.subscribe_picks();
        assert_eq!(surface.active_pick_subscriptions(), 2);

        assert!(surface.cancel_picks(first));
        assert_eq!(surface.active_pick_subscriptions(), 1);
        assert!(surface.cancel_picks(second));
        assert_eq!(surface.active_pick_subscriptions(), 0);
    }
}
