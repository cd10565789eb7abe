use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{PI, TAU};

use crate::core::{ContainerSize, Orientation, ViewportRect};
use crate::error::{GridError, GridResult};
use crate::render::{Color, ElementRole, ElementSnapshot, OverlayFrame, StyleValue};

const LABEL_FONT_SIZE_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub lines_drawn: usize,
    pub rings_drawn: usize,
    pub spokes_drawn: usize,
    pub labels_drawn: usize,
}

/// Pixel box of the overlay inside the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OverlayBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl OverlayBox {
    fn resolve(viewport: Option<&ViewportRect>, container: ContainerSize) -> Self {
        match viewport {
            Some(rect) => Self {
                x: rect.x.resolve_px(container.width),
                y: rect.y.resolve_px(container.height),
                width: rect.width.resolve_px(container.width),
                height: rect.height.resolve_px(container.height),
            },
            None => Self {
                x: 0.0,
                y: 0.0,
                width: container.width,
                height: container.height,
            },
        }
    }
}

/// Cairo + Pango painter for overlay snapshots.
///
/// Paints either into its own image surface or onto an external Cairo
/// context (for example a GTK `DrawingArea` callback).
#[derive(Debug)]
pub struct CairoOverlayPainter {
    surface: ImageSurface,
    line_color: Color,
    label_color: Color,
    last_stats: CairoPaintStats,
}

impl CairoOverlayPainter {
    pub fn new(width: i32, height: i32) -> GridResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            line_color: Color::rgba(0.0, 0.0, 0.0, 0.15),
            label_color: Color::rgb(0.2, 0.2, 0.2),
            last_stats: CairoPaintStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_line_color(&mut self, color: Color) -> GridResult<()> {
        color.validate()?;
        self.line_color = color;
        Ok(())
    }

    pub fn set_label_color(&mut self, color: Color) -> GridResult<()> {
        color.validate()?;
        self.label_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoPaintStats {
        self.last_stats
    }

    /// Paints into the owned surface, which acts as the container.
    pub fn paint(&mut self, frame: &OverlayFrame) -> GridResult<CairoPaintStats> {
        let container = ContainerSize::new(
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        );
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.paint_on_context(&context, frame, container)
    }

    pub fn paint_on_context(
        &mut self,
        context: &Context,
        frame: &OverlayFrame,
        container: ContainerSize,
    ) -> GridResult<CairoPaintStats> {
        frame.validate()?;
        let overlay = OverlayBox::resolve(frame.viewport.as_ref(), container);

        let mut stats = CairoPaintStats::default();
        for element in frame.elements_with_role(ElementRole::Line) {
            self.paint_line(context, overlay, element, &mut stats)?;
        }
        for element in frame.elements_with_role(ElementRole::Label) {
            self.paint_label(context, overlay, element, &mut stats);
        }

        self.last_stats = stats;
        Ok(stats)
    }

    fn paint_line(
        &self,
        context: &Context,
        overlay: OverlayBox,
        element: &ElementSnapshot,
        stats: &mut CairoPaintStats,
    ) -> GridResult<()> {
        let Some(layout) = &element.layout else {
            return Ok(());
        };
        let position = layout.effective_position();
        let size = layout.effective_size(overlay.width, overlay.height);
        let stroke_width = match layout.style_overrides.get("border-width") {
            Some(StyleValue::Number(width)) if *width > 0.0 => *width,
            _ => 1.0,
        };

        apply_color(context, self.line_color);
        context.set_line_width(stroke_width);

        match element.key.orientation {
            Orientation::Horizontal => {
                let x = overlay.x + position.left.map_or(0.0, |left| left.to_px(overlay.width));
                context.move_to(x, overlay.y);
                context.line_to(x, overlay.y + overlay.height);
                stats.lines_drawn += 1;
            }
            Orientation::Vertical => {
                let y = overlay.y + position.top.map_or(0.0, |top| top.to_px(overlay.height));
                context.move_to(overlay.x, y);
                context.line_to(overlay.x + overlay.width, y);
                stats.lines_drawn += 1;
            }
            Orientation::Radial => {
                let diameter = size.map_or(0.0, |size| size.width_px);
                // The ring's box starts at `position`; unset edges keep it centred.
                let center_x = overlay.x
                    + position.left.map_or(overlay.width / 2.0, |left| {
                        left.to_px(overlay.width) + diameter / 2.0
                    });
                let center_y = overlay.y
                    + position.top.map_or(overlay.height / 2.0, |top| {
                        top.to_px(overlay.height) + diameter / 2.0
                    });
                context.new_sub_path();
                context.arc(center_x, center_y, diameter / 2.0, 0.0, TAU);
                stats.rings_drawn += 1;
            }
            Orientation::Angular => {
                let radius = size.map_or(overlay.width.min(overlay.height), |size| size.width_px)
                    / 2.0;
                let angle = layout.rotation_deg.unwrap_or(0.0) * PI / 180.0;
                let center_x = overlay.x + overlay.width / 2.0;
                let center_y = overlay.y + overlay.height / 2.0;
                context.move_to(center_x, center_y);
                context.line_to(
                    center_x + radius * angle.cos(),
                    center_y + radius * angle.sin(),
                );
                stats.spokes_drawn += 1;
            }
        }

        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke grid line", err))
    }

    /// Labels without a layout are left unpainted.
    fn paint_label(
        &self,
        context: &Context,
        overlay: OverlayBox,
        element: &ElementSnapshot,
        stats: &mut CairoPaintStats,
    ) {
        let (Some(layout), Some(text)) = (&element.layout, &element.text) else {
            return;
        };
        if layout.position.is_none() {
            return;
        }
        let position = layout.effective_position();

        let pango_layout = pangocairo::functions::create_layout(context);
        let font = FontDescription::from_string(&format!("Sans {LABEL_FONT_SIZE_PX}"));
        pango_layout.set_font_description(Some(&font));
        pango_layout.set_text(text);
        let (text_width, text_height) = pango_layout.pixel_size();

        let (x, y) = match element.key.orientation {
            Orientation::Vertical => (
                overlay.x + 2.0,
                overlay.y + position.top.map_or(0.0, |top| top.to_px(overlay.height))
                    - f64::from(text_height),
            ),
            _ => (
                overlay.x + position.left.map_or(0.0, |left| left.to_px(overlay.width))
                    - f64::from(text_width) / 2.0,
                overlay.y + overlay.height - f64::from(text_height),
            ),
        };

        apply_color(context, self.label_color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &pango_layout);
        stats.labels_drawn += 1;
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GridError {
    GridError::InvalidData(format!("{prefix}: {err}"))
}
