use tracing::{debug, trace};

use crate::core::{ResolvedViewport, ValueRange};
use crate::error::GridResult;
use crate::render::{
    BoundaryMarker, ElementAttributes, ElementHandle, ElementKey, ElementRole, Renderer,
};

use super::label_format::format_locale_number;
use super::layout_mapper::{label_layout, line_layout, offset_percent};
use super::tick_generator::{TickRequest, generate_ticks};
use super::{AxisConfig, GridStats, LabelLocale, LinesGroupConfig, ValueSource};

/// Inputs for reconciling one lines group and its paired axis.
pub(super) struct GroupPass<'a> {
    pub(super) index: usize,
    pub(super) instance_id: u64,
    pub(super) group: &'a LinesGroupConfig,
    pub(super) axis: Option<&'a AxisConfig>,
    pub(super) viewport: &'a ResolvedViewport,
    pub(super) locale: LabelLocale,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct GroupOutcome {
    pub(super) stats: GridStats,
    pub(super) lines_created: usize,
    pub(super) labels_created: usize,
    /// Axis element shown by this pass.
    pub(super) axis: Option<ElementHandle>,
}

/// Hides every line and label of the overlay. Returns the number hidden.
pub(super) fn hide_all<R: Renderer>(renderer: &mut R) -> GridResult<usize> {
    let mut hidden = 0;
    for role in [ElementRole::Line, ElementRole::Label] {
        for handle in renderer.elements_with_role(role) {
            renderer.set_visible(handle, false)?;
            hidden += 1;
        }
    }
    Ok(hidden)
}

/// Hides axis elements that the last pass did not show.
pub(super) fn hide_stale_axes<R: Renderer>(
    renderer: &mut R,
    shown: &[ElementHandle],
) -> GridResult<()> {
    for handle in renderer.elements_with_role(ElementRole::Axis) {
        if !shown.contains(&handle) {
            renderer.set_visible(handle, false)?;
        }
    }
    Ok(())
}

pub(super) fn reconcile_group<R: Renderer>(
    renderer: &mut R,
    pass: GroupPass<'_>,
) -> GridResult<GroupOutcome> {
    let group = pass.group;
    let range = ValueRange::from_bounds(group.min, group.max)?;
    let request = TickRequest {
        range,
        logarithmic: group.logarithmic,
        orientation: group.orientation,
        extent_px: TickRequest::extent_for(group.orientation, pass.viewport),
    };
    let mut stats = GridStats::new(
        pass.index,
        pass.instance_id,
        group.orientation,
        group.logarithmic,
        range,
    );

    let ticks = generate_ticks(request, &group.values, &stats)?;
    let generated = ticks.len();
    let (values, offsets) = placeable_ticks(ticks, range, group.logarithmic)?;
    if values.len() < generated {
        debug!(
            group = pass.index,
            dropped = generated - values.len(),
            "dropped ticks outside the mappable range"
        );
    }
    stats.values = values.clone();
    stats.offsets = offsets;

    let titles = group
        .titles
        .resolve(&values, &stats, || locale_titles(&values, pass.locale));
    stats.titles = titles.clone();

    let lines_created = upsert_lines(renderer, &pass, range, &stats)?;
    trace!(
        group = pass.index,
        ticks = values.len(),
        lines_created,
        "reconciled grid lines"
    );

    let axis_key = ElementKey::axis(
        group.orientation,
        group.logarithmic,
        pass.index,
        pass.instance_id,
    );
    let Some(axis) = pass.axis else {
        if let Some(handle) = renderer.find_element(&axis_key) {
            renderer.set_visible(handle, false)?;
        }
        return Ok(GroupOutcome {
            stats,
            lines_created,
            labels_created: 0,
            axis: None,
        });
    };

    let axis_values = match &axis.values {
        ValueSource::Computed => values.clone(),
        source => source.resolve(values.clone(), &stats),
    };
    stats.axis_values = axis_values.clone();

    let inherits_values = axis.values.is_computed();
    let axis_titles = axis.titles.resolve(&axis_values, &stats, || {
        if inherits_values {
            titles.clone()
        } else {
            locale_titles(&axis_values, pass.locale)
        }
    });
    stats.axis_titles = axis_titles.clone();

    let labels = axis
        .labels
        .resolve(&axis_values, &stats, || axis_titles.clone());
    stats.labels = labels;

    let axis_handle = match renderer.find_element(&axis_key) {
        Some(handle) => handle,
        None => {
            debug!(key = %axis_key, "creating grid axis");
            renderer.create_element(
                ElementRole::Axis,
                &axis_key,
                ElementAttributes {
                    orientation: Some(group.orientation),
                    title: Some(axis.name.clone()),
                    name: Some(axis.name.clone()),
                    ..ElementAttributes::default()
                },
            )?
        }
    };
    renderer.set_visible(axis_handle, true)?;

    let labels_created = upsert_labels(renderer, &pass, range, &stats)?;
    trace!(
        group = pass.index,
        labels = stats.axis_values.len(),
        labels_created,
        "reconciled axis labels"
    );

    Ok(GroupOutcome {
        stats,
        lines_created,
        labels_created,
        axis: Some(axis_handle),
    })
}

/// Walks ticks from the highest value down, reusing elements by key.
fn upsert_lines<R: Renderer>(
    renderer: &mut R,
    pass: &GroupPass<'_>,
    range: ValueRange,
    stats: &GridStats,
) -> GridResult<usize> {
    let group = pass.group;
    let mut created = 0;

    for (index, value) in stats.values.iter().copied().enumerate().rev() {
        let key = ElementKey::line(
            group.orientation,
            group.logarithmic,
            value,
            pass.index,
            pass.instance_id,
        );
        let title = stats.titles.get(index).cloned().flatten();

        let handle = match renderer.find_element(&key) {
            Some(handle) => handle,
            None => {
                created += 1;
                renderer.create_element(
                    ElementRole::Line,
                    &key,
                    ElementAttributes {
                        orientation: Some(group.orientation),
                        value: Some(value),
                        title: title.clone(),
                        ..ElementAttributes::default()
                    },
                )?
            }
        };

        let layout = line_layout(
            group.orientation,
            stats.offsets[index],
            pass.viewport,
            BoundaryMarker::for_value(value, range.low, range.high),
            title,
            &group.style,
        );
        renderer.set_layout(handle, &layout)?;
        renderer.set_visible(handle, true)?;
    }

    Ok(created)
}

/// Creates missing labels; existing labels only toggle visibility.
fn upsert_labels<R: Renderer>(
    renderer: &mut R,
    pass: &GroupPass<'_>,
    range: ValueRange,
    stats: &GridStats,
) -> GridResult<usize> {
    let group = pass.group;
    let mut created = 0;

    for (index, value) in stats.axis_values.iter().copied().enumerate() {
        let Some(label) = stats.labels.get(index).cloned().flatten() else {
            continue;
        };
        if value.is_nan() {
            continue;
        }

        let key = ElementKey::label(
            group.orientation,
            group.logarithmic,
            value,
            pass.index,
            pass.instance_id,
        );
        let handle = match renderer.find_element(&key) {
            Some(handle) => handle,
            None => {
                created += 1;
                let handle = renderer.create_element(
                    ElementRole::Label,
                    &key,
                    ElementAttributes {
                        orientation: Some(group.orientation),
                        value: Some(value),
                        title: stats.axis_titles.get(index).cloned().flatten(),
                        for_key: Some(key.with_role(ElementRole::Line)),
                        ..ElementAttributes::default()
                    },
                )?;
                renderer.set_text(handle, &label)?;
                let offset = offset_percent(value, range, group.logarithmic).unwrap_or(f64::NAN);
                if let Some(layout) = label_layout(group.orientation, offset) {
                    renderer.set_layout(handle, &layout)?;
                }
                handle
            }
        };

        renderer.set_visible(handle, range.contains(value))?;
    }

    Ok(created)
}

/// Keeps ticks with a finite offset, paired with that offset.
fn placeable_ticks(
    ticks: Vec<f64>,
    range: ValueRange,
    logarithmic: bool,
) -> GridResult<(Vec<f64>, Vec<f64>)> {
    let mut values = Vec::with_capacity(ticks.len());
    let mut offsets = Vec::with_capacity(ticks.len());
    for value in ticks {
        let offset = offset_percent(value, range, logarithmic)?;
        if offset.is_finite() {
            values.push(value);
            offsets.push(offset);
        }
    }
    Ok((values, offsets))
}

fn locale_titles(values: &[f64], locale: LabelLocale) -> Vec<Option<String>> {
    values
        .iter()
        .map(|value| Some(format_locale_number(*value, locale)))
        .collect()
}
