use serde::{Deserialize, Serialize};

use crate::core::{Orientation, ViewportSource};
use crate::render::{StyleMap, StyleValue};

use super::{LabelLocale, TextSource, ValueSource};

/// One set of ruled lines along one orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinesGroupConfig {
    pub orientation: Orientation,
    pub logarithmic: bool,
    /// Range bounds in any order; `min > max` inverts the direction.
    pub min: f64,
    pub max: f64,
    pub values: ValueSource,
    pub titles: TextSource,
    pub style: StyleMap,
}

impl Default for LinesGroupConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            logarithmic: false,
            min: 0.0,
            max: 100.0,
            values: ValueSource::Computed,
            titles: TextSource::Computed,
            style: StyleMap::new(),
        }
    }
}

impl LinesGroupConfig {
    #[must_use]
    pub fn new(orientation: Orientation, min: f64, max: f64) -> Self {
        Self {
            orientation,
            min,
            max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    #[must_use]
    pub fn with_values(mut self, values: ValueSource) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn with_titles(mut self, titles: TextSource) -> Self {
        self.titles = titles;
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }
}

/// Value-to-label mapping paired by index with a lines group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AxisConfig {
    pub name: String,
    /// `Computed` inherits the paired group's values.
    pub values: ValueSource,
    pub titles: TextSource,
    /// `Computed` reuses the axis titles.
    pub labels: TextSource,
}

impl AxisConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: ValueSource) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn with_titles(mut self, titles: TextSource) -> Self {
        self.titles = titles;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: TextSource) -> Self {
        self.labels = labels;
        self
    }
}

/// Persistent configuration of one overlay instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridConfig {
    pub viewport: ViewportSource,
    /// `None` slots are skipped.
    pub lines: Vec<Option<LinesGroupConfig>>,
    /// Paired by index with `lines`; `None` slots hide the axis.
    pub axes: Vec<Option<AxisConfig>>,
    pub locale: LabelLocale,
}

impl GridConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportSource) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_lines_group(mut self, group: LinesGroupConfig) -> Self {
        self.lines.push(Some(group));
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axes.push(Some(axis));
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn lines_group(&self, index: usize) -> Option<&LinesGroupConfig> {
        self.lines.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn axis(&self, index: usize) -> Option<&AxisConfig> {
        self.axes.get(index).and_then(Option::as_ref)
    }

    /// Merges a partial update.
    ///
    /// A provided `lines`/`axes` sequence replaces the slot layout: `None`
    /// slots remove the entry, `Some` slots merge into the stored entry at the
    /// same index (or the defaults). Inside an entry every provided field
    /// replaces the stored one except `style`, which merges per property.
    pub fn apply(&mut self, update: GridUpdate) {
        if let Some(viewport) = update.viewport {
            self.viewport = viewport;
        }
        if let Some(locale) = update.locale {
            self.locale = locale;
        }
        if let Some(lines) = update.lines {
            self.lines = merge_slots(&self.lines, lines);
        }
        if let Some(axes) = update.axes {
            self.axes = merge_slots(&self.axes, axes);
        }
    }
}

/// Partial override of one lines group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinesGroupUpdate {
    pub orientation: Option<Orientation>,
    pub logarithmic: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub values: Option<ValueSource>,
    pub titles: Option<TextSource>,
    /// Merged into the stored style per property.
    pub style: Option<StyleMap>,
}

impl LinesGroupUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    #[must_use]
    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = Some(logarithmic);
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_values(mut self, values: ValueSource) -> Self {
        self.values = Some(values);
        self
    }

    #[must_use]
    pub fn with_titles(mut self, titles: TextSource) -> Self {
        self.titles = Some(titles);
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style
            .get_or_insert_with(StyleMap::new)
            .insert(property.into(), value.into());
        self
    }
}

impl From<LinesGroupConfig> for LinesGroupUpdate {
    fn from(config: LinesGroupConfig) -> Self {
        Self {
            orientation: Some(config.orientation),
            logarithmic: Some(config.logarithmic),
            min: Some(config.min),
            max: Some(config.max),
            values: Some(config.values),
            titles: Some(config.titles),
            style: Some(config.style),
        }
    }
}

/// Partial override of one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisUpdate {
    pub name: Option<String>,
    pub values: Option<ValueSource>,
    pub titles: Option<TextSource>,
    pub labels: Option<TextSource>,
}

impl AxisUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_values(mut self, values: ValueSource) -> Self {
        self.values = Some(values);
        self
    }

    #[must_use]
    pub fn with_titles(mut self, titles: TextSource) -> Self {
        self.titles = Some(titles);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: TextSource) -> Self {
        self.labels = Some(labels);
        self
    }
}

impl From<AxisConfig> for AxisUpdate {
    fn from(config: AxisConfig) -> Self {
        Self {
            name: Some(config.name),
            values: Some(config.values),
            titles: Some(config.titles),
            labels: Some(config.labels),
        }
    }
}

/// Changes applied by one `GridOverlay::update` call; `None` keeps stored state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridUpdate {
    pub viewport: Option<ViewportSource>,
    pub lines: Option<Vec<Option<LinesGroupUpdate>>>,
    pub axes: Option<Vec<Option<AxisUpdate>>>,
    pub locale: Option<LabelLocale>,
}

impl GridUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportSource) -> Self {
        self.viewport = Some(viewport);
        self
    }

    #[must_use]
    pub fn with_lines(mut self, lines: Vec<Option<LinesGroupUpdate>>) -> Self {
        self.lines = Some(lines);
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: Vec<Option<AxisUpdate>>) -> Self {
        self.axes = Some(axes);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl From<GridConfig> for GridUpdate {
    fn from(config: GridConfig) -> Self {
        Self {
            viewport: Some(config.viewport),
            lines: Some(
                config
                    .lines
                    .into_iter()
                    .map(|slot| slot.map(LinesGroupUpdate::from))
                    .collect(),
            ),
            axes: Some(
                config
                    .axes
                    .into_iter()
                    .map(|slot| slot.map(AxisUpdate::from))
                    .collect(),
            ),
            locale: Some(config.locale),
        }
    }
}

trait SlotUpdate<T> {
    fn apply_to(self, target: &mut T);
}

impl SlotUpdate<LinesGroupConfig> for LinesGroupUpdate {
    fn apply_to(self, target: &mut LinesGroupConfig) {
        if let Some(orientation) = self.orientation {
            target.orientation = orientation;
        }
        if let Some(logarithmic) = self.logarithmic {
            target.logarithmic = logarithmic;
        }
        if let Some(min) = self.min {
            target.min = min;
        }
        if let Some(max) = self.max {
            target.max = max;
        }
        if let Some(values) = self.values {
            target.values = values;
        }
        if let Some(titles) = self.titles {
            target.titles = titles;
        }
        if let Some(style) = self.style {
            target.style.extend(style);
        }
    }
}

impl SlotUpdate<AxisConfig> for AxisUpdate {
    fn apply_to(self, target: &mut AxisConfig) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(values) = self.values {
            target.values = values;
        }
        if let Some(titles) = self.titles {
            target.titles = titles;
        }
        if let Some(labels) = self.labels {
            target.labels = labels;
        }
    }
}

fn merge_slots<T, U>(stored: &[Option<T>], updates: Vec<Option<U>>) -> Vec<Option<T>>
where
    T: Clone + Default,
    U: SlotUpdate<T>,
{
    updates
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.map(|update| {
                let mut merged = stored
                    .get(index)
                    .and_then(Option::as_ref)
                    .cloned()
                    .unwrap_or_default();
                update.apply_to(&mut merged);
                merged
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{GridConfig, GridUpdate, LinesGroupConfig, LinesGroupUpdate};
    use crate::core::Orientation;
    use crate::render::StyleValue;

    #[test]
    fn style_merges_while_other_fields_replace() {
        let mut config = GridConfig::new().with_lines_group(
            LinesGroupConfig::new(Orientation::Vertical, 0.0, 10.0)
                .with_style("opacity", 0.5)
                .with_style("color", "red"),
        );

        config.apply(GridUpdate::new().with_lines(vec![Some(
            LinesGroupUpdate::new()
                .with_range(5.0, 50.0)
                .with_style("color", "blue"),
        )]));

        let group = config.lines_group(0).expect("group");
        assert_eq!(group.orientation, Orientation::Vertical);
        assert_eq!((group.min, group.max), (5.0, 50.0));
        assert_eq!(group.style.get("opacity"), Some(&StyleValue::Number(0.5)));
        assert_eq!(
            group.style.get("color"),
            Some(&StyleValue::Text("blue".to_owned()))
        );
    }

    #[test]
    fn none_slot_removes_and_absent_sequence_keeps() {
        let mut config = GridConfig::new()
            .with_lines_group(LinesGroupConfig::default())
            .with_lines_group(LinesGroupConfig::default());

        config.apply(GridUpdate::new());
        assert_eq!(config.lines.len(), 2);

        config.apply(GridUpdate::new().with_lines(vec![None, Some(LinesGroupUpdate::new())]));
        assert!(config.lines_group(0).is_none());
        assert!(config.lines_group(1).is_some());
    }
}
