//! lineboard-rs: selection, clipboard and undo coordination for line charts.
//!
//! This crate is a thin stateful layer over a chart surface it does not own:
//! it curates the surface's ordered series list (select, restyle, reorder,
//! delete, paste between surfaces) while every pixel-level concern stays with
//! the host's rendering system behind the [`surface::ChartSurface`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod surface;
pub mod telemetry;

pub use api::{InteractiveMode, LineSelector, SelectorConfig};
pub use error::{SelectorError, SelectorResult};
