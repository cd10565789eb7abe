use serde::{Deserialize, Serialize};

use crate::core::{Orientation, ValueRange};

/// Per-group context handed to value, title and label generators.
///
/// Fields fill up as the pass progresses: value generators see only the
/// range, title generators also see `values`, axis generators see everything
/// computed for the lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub index: usize,
    pub instance_id: u64,
    pub orientation: Orientation,
    pub logarithmic: bool,
    pub low: f64,
    pub high: f64,
    pub inverted: bool,
    /// Tick values in ascending order.
    pub values: Vec<f64>,
    /// Titles aligned with `values`.
    pub titles: Vec<Option<String>>,
    /// Offset percentages aligned with `values`.
    pub offsets: Vec<f64>,
    pub axis_values: Vec<f64>,
    pub axis_titles: Vec<Option<String>>,
    pub labels: Vec<Option<String>>,
}

impl GridStats {
    #[must_use]
    pub fn new(
        index: usize,
        instance_id: u64,
        orientation: Orientation,
        logarithmic: bool,
        range: ValueRange,
    ) -> Self {
        Self {
            index,
            instance_id,
            orientation,
            logarithmic,
            low: range.low,
            high: range.high,
            inverted: range.inverted,
            values: Vec::new(),
            titles: Vec::new(),
            offsets: Vec::new(),
            axis_values: Vec::new(),
            axis_titles: Vec::new(),
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        ValueRange {
            low: self.low,
            high: self.high,
            inverted: self.inverted,
        }
    }
}
