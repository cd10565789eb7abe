mod element;
mod frame;
mod memory_renderer;
mod primitives;

pub use element::{ElementAttributes, ElementHandle, ElementKey, ElementRole, truncate_value};
pub use frame::{ElementSnapshot, OverlayFrame};
pub use memory_renderer::{MemoryElement, MemoryRenderer, MemoryRendererStats};
pub use primitives::{
    BoundaryMarker, Color, LayoutDirective, Length, Position, Size, StyleMap, StyleValue,
};

use crate::core::{ContainerSize, ViewportRect};
use crate::error::GridResult;

/// Contract implemented by any visual-element backend.
///
/// The backend owns the element tree; the reconciler only addresses elements
/// through `ElementKey` lookups and the handles returned here, and is the sole
/// caller of the mutating methods for one overlay instance.
pub trait Renderer {
    /// Current size of the host container.
    fn container_size(&self) -> ContainerSize;

    /// Places the overlay box inside the container.
    fn place_overlay(&mut self, viewport: &ViewportRect) -> GridResult<()>;

    fn find_element(&self, key: &ElementKey) -> Option<ElementHandle>;

    /// All existing elements of `role`, hidden or not.
    fn elements_with_role(&self, role: ElementRole) -> Vec<ElementHandle>;

    fn create_element(
        &mut self,
        role: ElementRole,
        key: &ElementKey,
        attributes: ElementAttributes,
    ) -> GridResult<ElementHandle>;

    fn set_layout(&mut self, handle: ElementHandle, layout: &LayoutDirective) -> GridResult<()>;

    fn set_visible(&mut self, handle: ElementHandle, visible: bool) -> GridResult<()>;

    /// Sets display text; used for labels once, at creation.
    fn set_text(&mut self, handle: ElementHandle, text: &str) -> GridResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoOverlayPainter, CairoPaintStats};
