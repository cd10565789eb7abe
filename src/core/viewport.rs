use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::ContainerSize;
use crate::error::{GridError, GridResult};

/// Callback producing a viewport rectangle from the current container size.
pub type ViewportFn = Arc<dyn Fn(f64, f64) -> ViewportRect + Send + Sync + 'static>;

/// One viewport coordinate: either a pixel number or a CSS-like string
/// (`"20px"`, `"50%"`, `"calc(100% - 10px)"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewportLength {
    Px(f64),
    Css(String),
}

impl ViewportLength {
    /// Renders the length as CSS; numbers get a `px` suffix.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(value) => format!("{value}px"),
            Self::Css(text) => text.clone(),
        }
    }

    /// Resolves the length to pixels against the container extent.
    ///
    /// Unparseable CSS falls back to the full container extent.
    #[must_use]
    pub fn resolve_px(&self, container_extent: f64) -> f64 {
        match self {
            Self::Px(value) => *value,
            Self::Css(text) => {
                let text = text.trim();
                if let Some(percent) = text.strip_suffix('%') {
                    if let Ok(percent) = percent.trim().parse::<f64>() {
                        return container_extent * percent / 100.0;
                    }
                } else if let Ok(px) = text.strip_suffix("px").unwrap_or(text).trim().parse::<f64>()
                {
                    return px;
                }
                container_extent
            }
        }
    }
}

impl From<f64> for ViewportLength {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for ViewportLength {
    fn from(value: &str) -> Self {
        Self::Css(value.to_owned())
    }
}

/// Overlay rectangle `[x, y, width, height]` relative to the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub x: ViewportLength,
    pub y: ViewportLength,
    pub width: ViewportLength,
    pub height: ViewportLength,
}

impl ViewportRect {
    #[must_use]
    pub fn new(
        x: impl Into<ViewportLength>,
        y: impl Into<ViewportLength>,
        width: impl Into<ViewportLength>,
        height: impl Into<ViewportLength>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// Pixel rectangle covering the whole container.
    #[must_use]
    pub fn covering(container: ContainerSize) -> Self {
        Self::new(0.0, 0.0, container.width, container.height)
    }
}

/// Where the overlay viewport comes from on each update.
#[derive(Clone, Default, Serialize, Deserialize)]
pub enum ViewportSource {
    /// Cover the container: `[0, 0, width, height]`.
    #[default]
    Container,
    Fixed(ViewportRect),
    /// Re-evaluated with `(container_width, container_height)` on every update.
    #[serde(skip)]
    Computed(ViewportFn),
}

impl fmt::Debug for ViewportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => f.write_str("Container"),
            Self::Fixed(rect) => f.debug_tuple("Fixed").field(rect).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl PartialEq for ViewportSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Container, Self::Container) => true,
            (Self::Fixed(lhs), Self::Fixed(rhs)) => lhs == rhs,
            (Self::Computed(lhs), Self::Computed(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl ViewportSource {
    #[must_use]
    pub fn computed<F>(callback: F) -> Self
    where
        F: Fn(f64, f64) -> ViewportRect + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(callback))
    }

    /// Evaluates the source against the container and resolves pixel extents.
    pub fn resolve(&self, container: ContainerSize) -> GridResult<ResolvedViewport> {
        if !container.is_valid() {
            return Err(GridError::InvalidViewport {
                width: container.width,
                height: container.height,
            });
        }

        let rect = match self {
            Self::Container => ViewportRect::covering(container),
            Self::Fixed(rect) => rect.clone(),
            Self::Computed(callback) => callback(container.width, container.height),
        };
        let width = rect.width.resolve_px(container.width);
        let height = rect.height.resolve_px(container.height);
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(GridError::InvalidViewport { width, height });
        }

        Ok(ResolvedViewport {
            rect,
            width,
            height,
        })
    }
}

/// Viewport geometry for one update pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedViewport {
    pub rect: ViewportRect,
    pub width: f64,
    pub height: f64,
}

impl ResolvedViewport {
    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}
