use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Geometric arrangement of one lines group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Vertical rules placed along the x axis.
    #[default]
    #[serde(alias = "x")]
    Horizontal,
    /// Horizontal rules placed along the y axis, values increasing upward.
    #[serde(alias = "y")]
    Vertical,
    /// Concentric rings around the viewport center.
    #[serde(alias = "r")]
    Radial,
    /// Spokes rotated around the viewport center.
    #[serde(alias = "a")]
    Angular,
}

impl Orientation {
    /// Short code used in element identity keys.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
            Self::Radial => "r",
            Self::Angular => "a",
        }
    }
}

/// Normalized numeric range of a lines group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
    /// Set when the configured `min` was greater than `max`.
    pub inverted: bool,
}

impl ValueRange {
    /// Builds a range from bounds given in either order.
    pub fn from_bounds(min: f64, max: f64) -> GridResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GridError::InvalidData(format!(
                "range bounds must be finite, got min={min}, max={max}"
            )));
        }
        Ok(Self {
            low: min.min(max),
            high: min.max(max),
            inverted: min > max,
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        crate::core::scale_math::contains(value, self.low, self.high)
    }
}

/// Size of the host container the overlay is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}
