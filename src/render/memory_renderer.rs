use indexmap::IndexMap;

use crate::core::{ContainerSize, ViewportRect};
use crate::error::{GridError, GridResult};
use crate::render::{
    ElementAttributes, ElementHandle, ElementKey, ElementRole, ElementSnapshot, LayoutDirective,
    OverlayFrame, Renderer,
};

/// Counters of backend calls, used by tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryRendererStats {
    pub created: usize,
    pub layouts_applied: usize,
    pub texts_set: usize,
    pub overlay_placements: usize,
}

/// One pooled element.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement {
    pub key: ElementKey,
    pub role: ElementRole,
    pub attributes: ElementAttributes,
    pub layout: Option<LayoutDirective>,
    pub text: Option<String>,
    pub visible: bool,
}

/// Headless element pool used by tests and hosts without a visual tree.
///
/// Layout directives are still validated so invalid geometry is caught before
/// a real backend sees it.
#[derive(Debug)]
pub struct MemoryRenderer {
    container: ContainerSize,
    overlay: Option<ViewportRect>,
    index: IndexMap<ElementKey, ElementHandle>,
    elements: Vec<MemoryElement>,
    stats: MemoryRendererStats,
}

impl MemoryRenderer {
    #[must_use]
    pub fn new(container: ContainerSize) -> Self {
        Self {
            container,
            overlay: None,
            index: IndexMap::new(),
            elements: Vec::new(),
            stats: MemoryRendererStats::default(),
        }
    }

    /// Simulates a container resize; takes effect on the next update.
    pub fn set_container_size(&mut self, container: ContainerSize) {
        self.container = container;
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&ViewportRect> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> MemoryRendererStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn element(&self, key: &ElementKey) -> Option<&MemoryElement> {
        let handle = self.index.get(key)?;
        self.elements.get(slot(*handle))
    }

    pub fn elements(&self) -> impl Iterator<Item = &MemoryElement> {
        self.elements.iter()
    }

    /// Visible elements in creation order.
    #[must_use]
    pub fn snapshot(&self) -> OverlayFrame {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.visible)
            .fold(OverlayFrame::new(self.overlay.clone()), |frame, (slot, element)| {
                frame.with_element(ElementSnapshot {
                    handle: ElementHandle(slot as u64),
                    key: element.key,
                    role: element.role,
                    attributes: element.attributes.clone(),
                    layout: element.layout.clone(),
                    text: element.text.clone(),
                })
            })
    }

    fn element_mut(&mut self, handle: ElementHandle) -> GridResult<&mut MemoryElement> {
        self.elements
            .get_mut(slot(handle))
            .ok_or_else(|| GridError::InvalidData(format!("unknown element handle {}", handle.0)))
    }
}

impl Default for MemoryRenderer {
    fn default() -> Self {
        Self::new(ContainerSize::new(800.0, 600.0))
    }
}

impl Renderer for MemoryRenderer {
    fn container_size(&self) -> ContainerSize {
        self.container
    }

    fn place_overlay(&mut self, viewport: &ViewportRect) -> GridResult<()> {
        self.overlay = Some(viewport.clone());
        self.stats.overlay_placements += 1;
        Ok(())
    }

    fn find_element(&self, key: &ElementKey) -> Option<ElementHandle> {
        self.index.get(key).copied()
    }

    fn elements_with_role(&self, role: ElementRole) -> Vec<ElementHandle> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.role == role)
            .map(|(slot, _)| ElementHandle(slot as u64))
            .collect()
    }

    fn create_element(
        &mut self,
        role: ElementRole,
        key: &ElementKey,
        attributes: ElementAttributes,
    ) -> GridResult<ElementHandle> {
        if self.index.contains_key(key) {
            return Err(GridError::InvalidData(format!(
                "element `{key}` already exists"
            )));
        }
        let handle = ElementHandle(self.elements.len() as u64);
        self.elements.push(MemoryElement {
            key: *key,
            role,
            attributes,
            layout: None,
            text: None,
            visible: true,
        });
        self.index.insert(*key, handle);
        self.stats.created += 1;
        Ok(handle)
    }

    fn set_layout(&mut self, handle: ElementHandle, layout: &LayoutDirective) -> GridResult<()> {
        layout.validate()?;
        self.element_mut(handle)?.layout = Some(layout.clone());
        self.stats.layouts_applied += 1;
        Ok(())
    }

    fn set_visible(&mut self, handle: ElementHandle, visible: bool) -> GridResult<()> {
        self.element_mut(handle)?.visible = visible;
        Ok(())
    }

    fn set_text(&mut self, handle: ElementHandle, text: &str) -> GridResult<()> {
        self.element_mut(handle)?.text = Some(text.to_owned());
        self.stats.texts_set += 1;
        Ok(())
    }
}

fn slot(handle: ElementHandle) -> usize {
    usize::try_from(handle.0).unwrap_or(usize::MAX)
}
