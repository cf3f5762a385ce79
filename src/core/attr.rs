//! Closed enumeration of restyleable line attributes.
//!
//! The allow-list is a tagged enum rather than a set of attribute-name
//! strings: every attribute maps to a typed field of
//! [`SeriesStyle`](crate::core::SeriesStyle), so an assignment with the
//! wrong value kind is rejected before any series is touched. By-name
//! addressing stays available for scripted callers through `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::style::{
    CapStyle, Color, DashPattern, DrawStyle, JoinStyle, MarkerShape, SeriesStyle,
};
use crate::error::{SelectorError, SelectorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineAttr {
    Width,
    Dash,
    Color,
    Alpha,
    Visible,
    Label,
    Marker,
    MarkerSize,
    MarkerFaceColor,
    MarkerEdgeColor,
    CapStyle,
    JoinStyle,
    DrawStyle,
    MarkEvery,
    Antialiased,
}

impl LineAttr {
    pub const ALL: [Self; 15] = [
        Self::Width,
        Self::Dash,
        Self::Color,
        Self::Alpha,
        Self::Visible,
        Self::Label,
        Self::Marker,
        Self::MarkerSize,
        Self::MarkerFaceColor,
        Self::MarkerEdgeColor,
        Self::CapStyle,
        Self::JoinStyle,
        Self::DrawStyle,
        Self::MarkEvery,
        Self::Antialiased,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "linewidth",
            Self::Dash => "linestyle",
            Self::Color => "color",
            Self::Alpha => "alpha",
            Self::Visible => "visible",
            Self::Label => "label",
            Self::Marker => "marker",
            Self::MarkerSize => "markersize",
            Self::MarkerFaceColor => "markerfacecolor",
            Self::MarkerEdgeColor => "markeredgecolor",
            Self::CapStyle => "capstyle",
            Self::JoinStyle => "joinstyle",
            Self::DrawStyle => "drawstyle",
            Self::MarkEvery => "markevery",
            Self::Antialiased => "antialiased",
        }
    }

    #[must_use]
    pub const fn expected_kind(self) -> AttrKind {
        match self {
            Self::Width | Self::Alpha | Self::MarkerSize => AttrKind::Float,
            Self::Visible | Self::Antialiased => AttrKind::Bool,
            Self::Label => AttrKind::Text,
            Self::Color | Self::MarkerFaceColor | Self::MarkerEdgeColor => AttrKind::Color,
            Self::Dash => AttrKind::Dash,
            Self::Marker => AttrKind::Marker,
            Self::CapStyle => AttrKind::Cap,
            Self::JoinStyle => AttrKind::Join,
            Self::DrawStyle => AttrKind::Draw,
            Self::MarkEvery => AttrKind::Stride,
        }
    }
}

impl fmt::Display for LineAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineAttr {
    type Err = SelectorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == name)
            .ok_or_else(|| SelectorError::UnsupportedAttribute(name.to_owned()))
    }
}

/// Value kinds an [`AttrValue`] can carry, used for mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrKind {
    Float,
    Bool,
    Text,
    Color,
    Dash,
    Marker,
    Cap,
    Join,
    Draw,
    Stride,
}

impl AttrKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Color => "color",
            Self::Dash => "dash pattern",
            Self::Marker => "marker shape",
            Self::Cap => "cap style",
            Self::Join => "join style",
            Self::Draw => "draw style",
            Self::Stride => "stride",
        }
    }
}

/// Tagged attribute value accepted by the typed setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Float(f64),
    Bool(bool),
    Text(String),
    Color(Color),
    Dash(DashPattern),
    Marker(MarkerShape),
    Cap(CapStyle),
    Join(JoinStyle),
    Draw(DrawStyle),
    Stride(usize),
}

impl AttrValue {
    #[must_use]
    pub const fn kind(&self) -> AttrKind {
        match self {
            Self::Float(_) => AttrKind::Float,
            Self::Bool(_) => AttrKind::Bool,
            Self::Text(_) => AttrKind::Text,
            Self::Color(_) => AttrKind::Color,
            Self::Dash(_) => AttrKind::Dash,
            Self::Marker(_) => AttrKind::Marker,
            Self::Cap(_) => AttrKind::Cap,
            Self::Join(_) => AttrKind::Join,
            Self::Draw(_) => AttrKind::Draw,
            Self::Stride(_) => AttrKind::Stride,
        }
    }
}

fn kind_mismatch(attr: LineAttr, value: &AttrValue) -> SelectorError {
    SelectorError::AttrTypeMismatch {
        attr: attr.as_str(),
        expected: attr.expected_kind().as_str(),
        got: value.kind().as_str(),
    }
}

/// Checks that `value` is assignable to `attr`: matching kind and a sane
/// payload (finite widths, channel-bounded colors, nonzero stride).
pub fn validate_attr_value(attr: LineAttr, value: &AttrValue) -> SelectorResult<()> {
    if value.kind() != attr.expected_kind() {
        return Err(kind_mismatch(attr, value));
    }
    match (attr, value) {
        (LineAttr::Width, AttrValue::Float(v)) => {
            if !v.is_finite() || *v <= 0.0 {
                return Err(SelectorError::InvalidArgument(
                    "line width must be finite and > 0".to_owned(),
                ));
            }
        }
        (LineAttr::Alpha, AttrValue::Float(v)) => {
            if !v.is_finite() || !(0.0..=1.0).contains(v) {
                return Err(SelectorError::InvalidArgument(
                    "alpha must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        (LineAttr::MarkerSize, AttrValue::Float(v)) => {
            if !v.is_finite() || *v < 0.0 {
                return Err(SelectorError::InvalidArgument(
                    "marker size must be finite and >= 0".to_owned(),
                ));
            }
        }
        (
            LineAttr::Color | LineAttr::MarkerFaceColor | LineAttr::MarkerEdgeColor,
            AttrValue::Color(color),
        ) => color.validate()?,
        (LineAttr::MarkEvery, AttrValue::Stride(stride)) => {
            if *stride == 0 {
                return Err(SelectorError::InvalidArgument(
                    "markevery stride must be >= 1".to_owned(),
                ));
            }
        }
        _ => {}
    }
    Ok(())
}

impl SeriesStyle {
    /// Reads the current value of one allow-listed attribute.
    #[must_use]
    pub fn attr(&self, attr: LineAttr) -> AttrValue {
        match attr {
            LineAttr::Width => AttrValue::Float(self.width),
            LineAttr::Dash => AttrValue::Dash(self.dash),
            LineAttr::Color => AttrValue::Color(self.color),
            LineAttr::Alpha => AttrValue::Float(self.alpha),
            LineAttr::Visible => AttrValue::Bool(self.visible),
            LineAttr::Label => AttrValue::Text(self.label.clone()),
            LineAttr::Marker => AttrValue::Marker(self.marker),
            LineAttr::MarkerSize => AttrValue::Float(self.marker_size),
            LineAttr::MarkerFaceColor => AttrValue::Color(self.marker_face_color),
            LineAttr::MarkerEdgeColor => AttrValue::Color(self.marker_edge_color),
            LineAttr::CapStyle => AttrValue::Cap(self.cap_style),
            LineAttr::JoinStyle => AttrValue::Join(self.join_style),
            LineAttr::DrawStyle => AttrValue::Draw(self.draw_style),
            LineAttr::MarkEvery => AttrValue::Stride(self.mark_every),
            LineAttr::Antialiased => AttrValue::Bool(self.antialiased),
        }
    }

    /// Assigns one allow-listed attribute, rejecting mismatched value kinds.
    pub fn set_attr(&mut self, attr: LineAttr, value: AttrValue) -> SelectorResult<()> {
        match (attr, value) {
            (LineAttr::Width, AttrValue::Float(v)) => self.width = v,
            (LineAttr::Dash, AttrValue::Dash(v)) => self.dash = v,
            (LineAttr::Color, AttrValue::Color(v)) => self.color = v,
            (LineAttr::Alpha, AttrValue::Float(v)) => self.alpha = v,
            (LineAttr::Visible, AttrValue::Bool(v)) => self.visible = v,
            (LineAttr::Label, AttrValue::Text(v)) => self.label = v,
            (LineAttr::Marker, AttrValue::Marker(v)) => self.marker = v,
            (LineAttr::MarkerSize, AttrValue::Float(v)) => self.marker_size = v,
            (LineAttr::MarkerFaceColor, AttrValue::Color(v)) => self.marker_face_color = v,
            (LineAttr::MarkerEdgeColor, AttrValue::Color(v)) => self.marker_edge_color = v,
            (LineAttr::CapStyle, AttrValue::Cap(v)) => self.cap_style = v,
            (LineAttr::JoinStyle, AttrValue::Join(v)) => self.join_style = v,
            (LineAttr::DrawStyle, AttrValue::Draw(v)) => self.draw_style = v,
            (LineAttr::MarkEvery, AttrValue::Stride(v)) => self.mark_every = v,
            (LineAttr::Antialiased, AttrValue::Bool(v)) => self.antialiased = v,
            (attr, ref value) => return Err(kind_mismatch(attr, value)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AttrValue, LineAttr, validate_attr_value};
    use crate::core::style::SeriesStyle;
    use crate::error::SelectorError;

    #[test]
    fn every_attr_round_trips_through_typed_accessors() {
        let mut style = SeriesStyle::default();
        for attr in LineAttr::ALL {
            let value = style.attr(attr);
            style.set_attr(attr, value.clone()).expect("same-kind set");
            assert_eq!(style.attr(attr), value);
        }
    }

    #[test]
    fn kind_mismatch_is_rejected_without_mutation() {
        let mut style = SeriesStyle::default();
        let before = style.clone();
        let err = style
            .set_attr(LineAttr::Width, AttrValue::Bool(true))
            .expect_err("bool is not a width");
        assert!(matches!(err, SelectorError::AttrTypeMismatch { .. }));
        assert_eq!(style, before);
    }

    #[test]
    fn attr_names_resolve_back_through_from_str() {
        for attr in LineAttr::ALL {
            let parsed: LineAttr = attr.as_str().parse().expect("known name");
            assert_eq!(parsed, attr);
        }
        let err = "zorder".parse::<LineAttr>().expect_err("not allow-listed");
        assert!(matches!(err, SelectorError::UnsupportedAttribute(name) if name == "zorder"));
    }

    #[test]
    fn value_validation_catches_bad_payloads() {
        assert!(validate_attr_value(LineAttr::Width, &AttrValue::Float(0.0)).is_err());
        assert!(validate_attr_value(LineAttr::Alpha, &AttrValue::Float(1.5)).is_err());
        assert!(validate_attr_value(LineAttr::MarkEvery, &AttrValue::Stride(0)).is_err());
        assert!(validate_attr_value(LineAttr::Width, &AttrValue::Float(2.0)).is_ok());
    }
}
