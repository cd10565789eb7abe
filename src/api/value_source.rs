use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::GridStats;

/// Maps a candidate tick `(value, index, stats)` to a value; `None` drops it.
pub type ValueGeneratorFn =
    Arc<dyn Fn(f64, usize, &GridStats) -> Option<f64> + Send + Sync + 'static>;

/// Produces text for a tick `(value, index, stats)`; `None` leaves it out.
pub type TextGeneratorFn =
    Arc<dyn Fn(f64, usize, &GridStats) -> Option<String> + Send + Sync + 'static>;

/// Source of tick values for a lines group or an axis.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Nice-step values for lines; the paired group's values for an axis.
    #[default]
    Computed,
    Explicit(Vec<f64>),
    #[serde(skip)]
    Generator(ValueGeneratorFn),
}

impl ValueSource {
    #[must_use]
    pub fn explicit(values: impl Into<Vec<f64>>) -> Self {
        Self::Explicit(values.into())
    }

    #[must_use]
    pub fn generator<F>(generator: F) -> Self
    where
        F: Fn(f64, usize, &GridStats) -> Option<f64> + Send + Sync + 'static,
    {
        Self::Generator(Arc::new(generator))
    }

    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed)
    }

    /// Applies the source on top of `computed`.
    pub(super) fn resolve(&self, computed: Vec<f64>, stats: &GridStats) -> Vec<f64> {
        match self {
            Self::Computed => computed,
            Self::Explicit(values) => values.clone(),
            Self::Generator(generator) => computed
                .iter()
                .enumerate()
                .filter_map(|(index, value)| generator(*value, index, stats))
                .collect(),
        }
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed => f.write_str("Computed"),
            Self::Explicit(values) => f.debug_tuple("Explicit").field(values).finish(),
            Self::Generator(_) => f.write_str("Generator(<fn>)"),
        }
    }
}

impl PartialEq for ValueSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Computed, Self::Computed) => true,
            (Self::Explicit(lhs), Self::Explicit(rhs)) => lhs == rhs,
            (Self::Generator(lhs), Self::Generator(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

/// Source of titles or labels.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Built-in default for the field (locale number, inherited titles, ...).
    #[default]
    Computed,
    Explicit(Vec<String>),
    #[serde(skip)]
    Generator(TextGeneratorFn),
}

impl TextSource {
    #[must_use]
    pub fn explicit<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Explicit(texts.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn generator<F>(generator: F) -> Self
    where
        F: Fn(f64, usize, &GridStats) -> Option<String> + Send + Sync + 'static,
    {
        Self::Generator(Arc::new(generator))
    }

    /// Resolves one text per value; `computed` supplies the default.
    pub(super) fn resolve<F>(
        &self,
        values: &[f64],
        stats: &GridStats,
        computed: F,
    ) -> Vec<Option<String>>
    where
        F: FnOnce() -> Vec<Option<String>>,
    {
        match self {
            Self::Computed => computed(),
            Self::Explicit(texts) => (0..values.len())
                .map(|index| texts.get(index).cloned())
                .collect(),
            Self::Generator(generator) => values
                .iter()
                .enumerate()
                .map(|(index, value)| generator(*value, index, stats))
                .collect(),
        }
    }
}

impl fmt::Debug for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed => f.write_str("Computed"),
            Self::Explicit(texts) => f.debug_tuple("Explicit").field(texts).finish(),
            Self::Generator(_) => f.write_str("Generator(<fn>)"),
        }
    }
}

impl PartialEq for TextSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Computed, Self::Computed) => true,
            (Self::Explicit(lhs), Self::Explicit(rhs)) => lhs == rhs,
            (Self::Generator(lhs), Self::Generator(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}
