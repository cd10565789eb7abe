use crate::error::{GridError, GridResult};
use crate::render::StyleValue;

use super::{GridConfig, LinesGroupConfig, ValueSource};

pub(super) fn validate_grid_config(config: &GridConfig) -> GridResult<()> {
    for (index, group) in config.lines.iter().enumerate() {
        if let Some(group) = group {
            validate_lines_group(index, group)?;
        }
    }
    for (index, axis) in config.axes.iter().enumerate() {
        if let Some(axis) = axis {
            validate_explicit_values(&format!("axis {index}"), &axis.values)?;
        }
    }
    Ok(())
}

fn validate_lines_group(index: usize, group: &LinesGroupConfig) -> GridResult<()> {
    if !group.min.is_finite() || !group.max.is_finite() {
        return Err(GridError::InvalidData(format!(
            "lines group {index} range must be finite: [{}, {}]",
            group.min, group.max
        )));
    }
    validate_explicit_values(&format!("lines group {index}"), &group.values)?;

    for (property, value) in &group.style {
        if property.is_empty() {
            return Err(GridError::InvalidData(format!(
                "lines group {index} style property name must not be empty"
            )));
        }
        if let StyleValue::Number(number) = value {
            if !number.is_finite() {
                return Err(GridError::InvalidData(format!(
                    "lines group {index} style `{property}` must be finite"
                )));
            }
        }
    }
    Ok(())
}

fn validate_explicit_values(owner: &str, source: &ValueSource) -> GridResult<()> {
    if let ValueSource::Explicit(values) = source {
        if let Some(value) = values.iter().find(|value| !value.is_finite()) {
            return Err(GridError::InvalidData(format!(
                "{owner} explicit values must be finite, got {value}"
            )));
        }
    }
    Ok(())
}
