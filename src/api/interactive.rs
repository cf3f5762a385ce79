use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::SeriesId;
use crate::surface::ChartSurface;

use super::LineSelector;

/// What a pick event currently does. `Select` and `Delete` are mutually
/// exclusive by construction; arming one always disarms the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractiveMode {
    #[default]
    Off,
    Select,
    Delete,
}

impl fmt::Display for InteractiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Select => "select",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

impl<S: ChartSurface> LineSelector<S> {
    /// Arms interactive selection: picked series join the clipboard.
    pub fn enable_interactive_select(&mut self) {
        self.rearm(InteractiveMode::Select);
    }

    /// Arms interactive deletion: picked series are snapshotted and removed.
    pub fn enable_interactive_delete(&mut self) {
        self.rearm(InteractiveMode::Delete);
    }

    fn rearm(&mut self, mode: InteractiveMode) {
        self.disable_interactive();

        let radius = self.config.pick_radius;
        let ids: Vec<SeriesId> = self
            .surface
            .series()
            .iter()
            .map(|handle| handle.borrow().id())
            .collect();
        for id in ids {
            self.surface.set_pickable(id, Some(radius));
        }

        self.subscription = Some(self.surface.subscribe_picks());
        self.mode = mode;
        debug!(%mode, "interactive mode armed");
    }

    /// Cancels the active pick subscription, if any. Idempotent.
    pub fn disable_interactive(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.surface.cancel_picks(subscription);
        }
        self.mode = InteractiveMode::Off;
    }

    /// Entry point for pick events forwarded by the host's event loop.
    ///
    /// Runs to completion before the event loop may dispatch the next event;
    /// there is no re-entrancy. Dispatches on the current interactive mode:
    /// select adds the picked series to the clipboard, delete snapshots the
    /// list and removes it (tolerating a stale pick), off ignores the event.
    pub fn handle_pick(&mut self, id: SeriesId) {
        match self.mode {
            InteractiveMode::Off => {
                debug!(id = id.raw(), "pick ignored, interactive mode is off");
            }
            InteractiveMode::Select => {
                let picked = self
                    .surface
                    .series()
                    .iter()
                    .find(|handle| handle.borrow().id() == id)
                    .cloned();
                match picked {
                    Some(handle) => {
                        self.clipboard.add(handle);
                    }
                    None => warn!(id = id.raw(), "picked series not on surface, ignoring"),
                }
            }
            InteractiveMode::Delete => {
                self.history.snapshot(self.surface.series());
                if self.surface.remove_series(id) {
                    debug!(id = id.raw(), "deleted picked series");
                } else {
                    warn!(id = id.raw(), "picked series not on surface, skipping deletion");
                }
                self.redraw();
            }
        }
    }
}
