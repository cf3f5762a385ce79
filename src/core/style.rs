use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> SelectorResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SelectorError::InvalidArgument(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarkerShape {
    #[default]
    None,
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    Cross,
    Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CapStyle {
    #[default]
    Butt,
    Round,
    Projecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JoinStyle {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// How samples are connected when the series is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DrawStyle {
    #[default]
    Straight,
    StepsPre,
    StepsMid,
    StepsPost,
}

/// Full visual presentation of one line series.
///
/// Every field is reachable through the [`crate::core::LineAttr`] allow-list,
/// so bulk attribute operations and paste cover the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub width: f64,
    pub dash: DashPattern,
    pub color: Color,
    /// Whole-series transparency multiplier applied on top of `color.alpha`.
    pub alpha: f64,
    pub visible: bool,
    pub label: String,
    pub marker: MarkerShape,
    pub marker_size: f64,
    pub marker_face_color: Color,
    pub marker_edge_color: Color,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,
    pub draw_style: DrawStyle,
    /// Stroke every Nth sample only; 1 means every sample.
    pub mark_every: usize,
    pub antialiased: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        let color = Color::rgb(0.122, 0.467, 0.706);
        Self {
            width: 1.5,
            dash: DashPattern::Solid,
            color,
            alpha: 1.0,
            visible: true,
            label: String::new(),
            marker: MarkerShape::None,
            marker_size: 6.0,
            marker_face_color: color,
            marker_edge_color: color,
            cap_style: CapStyle::Butt,
            join_style: JoinStyle::Miter,
            draw_style: DrawStyle::Straight,
            mark_every: 1,
            antialiased: true,
        }
    }
}

impl SeriesStyle {
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}
