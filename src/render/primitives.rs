use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

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

    pub fn validate(self) -> GridResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GridError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Style override value. Numbers are pixel lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Number(value) => format!("{value}px"),
            Self::Text(text) => text.clone(),
        }
    }

    /// Reads the value as a length: bare numbers and `px` suffixes are
    /// pixels, a `%` suffix is a percentage.
    #[must_use]
    pub fn as_length(&self) -> Option<Length> {
        let length = match self {
            Self::Number(value) => Length::Px(*value),
            Self::Text(text) => {
                let text = text.trim();
                if let Some(percent) = text.strip_suffix('%') {
                    Length::Percent(percent.trim().parse().ok()?)
                } else {
                    let px = text.strip_suffix("px").unwrap_or(text);
                    Length::Px(px.trim().parse().ok()?)
                }
            }
        };
        length.is_finite().then_some(length)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Insertion-ordered style property map.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Length relative to the overlay viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    Percent(f64),
    Px(f64),
}

impl Length {
    /// Resolves to pixels along an axis of `extent` pixels.
    #[must_use]
    pub fn to_px(self, extent: f64) -> f64 {
        match self {
            Self::Percent(percent) => extent * percent / 100.0,
            Self::Px(px) => px,
        }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        match self {
            Self::Percent(percent) => format!("{percent}%"),
            Self::Px(px) => format!("{px}px"),
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::Percent(value) | Self::Px(value) => value.is_finite(),
        }
    }
}

/// Offset of an element's box from the overlay's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub left: Option<Length>,
    pub top: Option<Length>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width_px: f64,
    pub height_px: f64,
}

/// Marks a line drawn exactly on a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryMarker {
    #[default]
    None,
    Min,
    Max,
    /// Zero-width range: the line sits on both bounds.
    Both,
}

impl BoundaryMarker {
    #[must_use]
    pub fn for_value(value: f64, low: f64, high: f64) -> Self {
        match (value == low, value == high) {
            (true, true) => Self::Both,
            (true, false) => Self::Min,
            (false, true) => Self::Max,
            (false, false) => Self::None,
        }
    }
}

/// Geometry and decoration applied to one element by the renderer.
///
/// `style_overrides` are applied after the computed geometry and win over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LayoutDirective {
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub rotation_deg: Option<f64>,
    pub corner_radius_px: Option<f64>,
    pub boundary: BoundaryMarker,
    pub title: Option<String>,
    pub style_overrides: StyleMap,
}

impl LayoutDirective {
    /// Computed position with `left`/`top` style overrides applied.
    #[must_use]
    pub fn effective_position(&self) -> Position {
        let mut position = self.position.unwrap_or_default();
        if let Some(left) = self.override_length("left") {
            position.left = Some(left);
        }
        if let Some(top) = self.override_length("top") {
            position.top = Some(top);
        }
        position
    }

    /// Computed size with `width`/`height` style overrides applied, resolved
    /// against an overlay of `extent_width` x `extent_height` pixels.
    #[must_use]
    pub fn effective_size(&self, extent_width: f64, extent_height: f64) -> Option<Size> {
        let width = self.override_length("width");
        let height = self.override_length("height");
        if width.is_none() && height.is_none() {
            return self.size;
        }
        let base = self.size.unwrap_or(Size {
            width_px: 0.0,
            height_px: 0.0,
        });
        Some(Size {
            width_px: width.map_or(base.width_px, |width| width.to_px(extent_width)),
            height_px: height.map_or(base.height_px, |height| height.to_px(extent_height)),
        })
    }

    fn override_length(&self, property: &str) -> Option<Length> {
        self.style_overrides
            .get(property)
            .and_then(StyleValue::as_length)
    }

    pub fn validate(&self) -> GridResult<()> {
        if let Some(position) = self.position {
            for length in [position.left, position.top].into_iter().flatten() {
                if !length.is_finite() {
                    return Err(GridError::InvalidData(
                        "layout position must be finite".to_owned(),
                    ));
                }
            }
        }
        if let Some(size) = self.size {
            if !size.width_px.is_finite()
                || !size.height_px.is_finite()
                || size.width_px < 0.0
                || size.height_px < 0.0
            {
                return Err(GridError::InvalidData(
                    "layout size must be finite and >= 0".to_owned(),
                ));
            }
        }
        for (name, value) in [
            ("rotation", self.rotation_deg),
            ("corner radius", self.corner_radius_px),
        ] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(GridError::InvalidData(format!(
                    "layout {name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutDirective, Length, Position, Size, StyleValue};

    #[test]
    fn style_values_read_as_lengths() {
        assert_eq!(StyleValue::from(12.0).as_length(), Some(Length::Px(12.0)));
        assert_eq!(StyleValue::from("4px").as_length(), Some(Length::Px(4.0)));
        assert_eq!(
            StyleValue::from("25%").as_length(),
            Some(Length::Percent(25.0))
        );
        assert_eq!(StyleValue::from("red").as_length(), None);
    }

    #[test]
    fn overrides_win_over_computed_geometry() {
        let mut layout = LayoutDirective {
            position: Some(Position {
                left: Some(Length::Percent(50.0)),
                top: None,
            }),
            size: Some(Size {
                width_px: 100.0,
                height_px: 100.0,
            }),
            ..LayoutDirective::default()
        };
        layout.style_overrides.insert("left".to_owned(), 10.0.into());
        layout.style_overrides.insert("width".to_owned(), "50%".into());

        assert_eq!(layout.effective_position().left, Some(Length::Px(10.0)));
        assert_eq!(
            layout.effective_size(400.0, 200.0),
            Some(Size {
                width_px: 200.0,
                height_px: 100.0,
            })
        );
    }
}
