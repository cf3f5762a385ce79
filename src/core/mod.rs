mod attr;
mod clipboard;
mod series;
mod snapshot;
mod style;
mod types;

pub use attr::{AttrKind, AttrValue, LineAttr, validate_attr_value};
pub use clipboard::Clipboard;
pub use series::{Series, SeriesHandle};
pub use snapshot::{DEFAULT_SNAPSHOT_CAPACITY, SnapshotBuffer};
pub use style::{CapStyle, Color, DashPattern, DrawStyle, JoinStyle, MarkerShape, SeriesStyle};
pub use types::{DataPoint, SeriesId};
