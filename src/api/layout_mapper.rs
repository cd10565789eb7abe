use crate::core::scale_math::{linear_ratio, log_ratio};
use crate::core::{Orientation, ResolvedViewport, ValueRange};
use crate::error::GridResult;
use crate::render::{BoundaryMarker, LayoutDirective, Length, Position, Size, StyleMap};

/// Maps a tick value to its offset percentage (`0..=100` inside the range).
///
/// Inverted ranges mirror the ratio so positions keep following `min -> max`.
pub fn offset_percent(value: f64, range: ValueRange, logarithmic: bool) -> GridResult<f64> {
    let ratio = if logarithmic {
        log_ratio(value, range.low, range.high)?
    } else {
        linear_ratio(value, range.low, range.high)
    };
    let ratio = if range.inverted { 1.0 - ratio } else { ratio };
    Ok(ratio * 100.0)
}

/// Layout of a ruled line at `offset` percent.
#[must_use]
pub fn line_layout(
    orientation: Orientation,
    offset: f64,
    viewport: &ResolvedViewport,
    boundary: BoundaryMarker,
    title: Option<String>,
    style: &StyleMap,
) -> LayoutDirective {
    let mut layout = LayoutDirective {
        boundary,
        title,
        ..LayoutDirective::default()
    };

    match orientation {
        Orientation::Horizontal => {
            layout.position = Some(Position {
                left: Some(Length::Percent(offset)),
                top: None,
            });
        }
        Orientation::Vertical => {
            layout.position = Some(Position {
                left: None,
                top: Some(Length::Percent(100.0 - offset)),
            });
        }
        Orientation::Radial => {
            let side = viewport.min_side();
            let diameter = side * offset / 100.0;
            layout.position = Some(Position {
                left: Some(Length::Px(viewport.width / 2.0 - diameter / 2.0)),
                top: Some(Length::Px(viewport.height / 2.0 - diameter / 2.0)),
            });
            layout.size = Some(Size {
                width_px: diameter,
                height_px: diameter,
            });
            layout.corner_radius_px = Some(side);
        }
        Orientation::Angular => {
            layout.position = Some(Position {
                left: Some(Length::Px(0.0)),
                top: Some(Length::Percent(50.0)),
            });
            layout.rotation_deg = Some(offset * 360.0 / 100.0);
        }
    }

    layout.style_overrides = style.clone();
    layout
}

/// Layout of an axis label placed at `offset` percent.
///
/// Only horizontal and vertical axes position their labels; radial and
/// angular labels are left to the renderer's own placement.
#[must_use]
pub fn label_layout(orientation: Orientation, offset: f64) -> Option<LayoutDirective> {
    if !offset.is_finite() {
        return None;
    }
    let position = match orientation {
        Orientation::Horizontal => Position {
            left: Some(Length::Percent(offset)),
            top: None,
        },
        Orientation::Vertical => Position {
            left: None,
            top: Some(Length::Percent(100.0 - offset)),
        },
        Orientation::Radial | Orientation::Angular => return None,
    };
    Some(LayoutDirective {
        position: Some(position),
        ..LayoutDirective::default()
    })
}
