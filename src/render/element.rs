use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Orientation;

/// Kind of visual element managed by the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementRole {
    Line,
    Label,
    Axis,
}

impl ElementRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Label => "label",
            Self::Axis => "axis",
        }
    }
}

/// Opaque renderer-side handle of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(pub u64);

/// Deterministic identity of a visual element.
///
/// Two computations that produce the same key address the same element, so
/// repeated updates reuse elements instead of creating new ones. Values are
/// truncated toward zero; ticks sharing an integer part share one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey {
    pub role: ElementRole,
    pub orientation: Orientation,
    pub logarithmic: bool,
    /// Truncated tick value; absent for axis containers.
    pub value: Option<i64>,
    pub group_index: usize,
    pub instance_id: u64,
}

impl ElementKey {
    #[must_use]
    pub fn line(
        orientation: Orientation,
        logarithmic: bool,
        value: f64,
        group_index: usize,
        instance_id: u64,
    ) -> Self {
        Self {
            role: ElementRole::Line,
            orientation,
            logarithmic,
            value: Some(truncate_value(value)),
            group_index,
            instance_id,
        }
    }

    #[must_use]
    pub fn label(
        orientation: Orientation,
        logarithmic: bool,
        value: f64,
        group_index: usize,
        instance_id: u64,
    ) -> Self {
        Self {
            role: ElementRole::Label,
            ..Self::line(orientation, logarithmic, value, group_index, instance_id)
        }
    }

    #[must_use]
    pub fn axis(
        orientation: Orientation,
        logarithmic: bool,
        group_index: usize,
        instance_id: u64,
    ) -> Self {
        Self {
            role: ElementRole::Axis,
            orientation,
            logarithmic,
            value: None,
            group_index,
            instance_id,
        }
    }

    /// Same identity under another role, e.g. the line a label annotates.
    #[must_use]
    pub fn with_role(self, role: ElementRole) -> Self {
        Self { role, ..self }
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid-{}-{}", self.role.as_str(), self.orientation.code())?;
        if self.logarithmic {
            f.write_str("-log")?;
        }
        if let Some(value) = self.value {
            write!(f, "-{value}")?;
        }
        write!(f, "-{}-{}", self.group_index, self.instance_id)
    }
}

/// Truncates toward zero; `NaN` maps to `0` and infinities saturate.
#[must_use]
pub fn truncate_value(value: f64) -> i64 {
    value.trunc() as i64
}

/// Attributes fixed at element creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementAttributes {
    pub orientation: Option<Orientation>,
    /// Exact tick value carried by lines and labels.
    pub value: Option<f64>,
    /// Tooltip text.
    pub title: Option<String>,
    /// Display name of an axis container.
    pub name: Option<String>,
    /// Line annotated by a label.
    pub for_key: Option<ElementKey>,
}
