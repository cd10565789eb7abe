use serde::{Deserialize, Serialize};

use crate::core::ViewportRect;
use crate::error::{GridError, GridResult};
use crate::render::{ElementAttributes, ElementHandle, ElementKey, ElementRole, LayoutDirective};

/// Visible state of one element at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub handle: ElementHandle,
    pub key: ElementKey,
    pub role: ElementRole,
    pub attributes: ElementAttributes,
    pub layout: Option<LayoutDirective>,
    pub text: Option<String>,
}

/// Backend-agnostic view of every visible overlay element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayFrame {
    pub viewport: Option<ViewportRect>,
    pub elements: Vec<ElementSnapshot>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new(viewport: Option<ViewportRect>) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: ElementSnapshot) -> Self {
        self.elements.push(element);
        self
    }

    pub fn validate(&self) -> GridResult<()> {
        for element in &self.elements {
            if let Some(layout) = &element.layout {
                layout.validate().map_err(|err| {
                    GridError::InvalidData(format!("element `{}`: {err}", element.key))
                })?;
            }
            if element.role == ElementRole::Label && element.text.is_none() {
                return Err(GridError::InvalidData(format!(
                    "label `{}` must carry text",
                    element.key
                )));
            }
        }
        Ok(())
    }

    pub fn elements_with_role(&self, role: ElementRole) -> impl Iterator<Item = &ElementSnapshot> {
        self.elements
            .iter()
            .filter(move |element| element.role == role)
    }

    #[must_use]
    pub fn count(&self, role: ElementRole) -> usize {
        self.elements_with_role(role).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
