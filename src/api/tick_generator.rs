use smallvec::{SmallVec, smallvec};
use tracing::warn;

use crate::core::scale_math::{ensure_log_range, nice_step, pow10, snap_to_step_precision};
use crate::core::{Orientation, ResolvedViewport, ValueRange};
use crate::error::{GridError, GridResult};

use super::{GridStats, ValueSource};

/// Target spacing between two computed ticks.
pub const TICK_SPACING_PX: f64 = 50.0;

const MAX_COMPUTED_TICKS: usize = 10_000;

/// Inputs of one tick computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRequest {
    pub range: ValueRange,
    pub logarithmic: bool,
    pub orientation: Orientation,
    /// Extent the ticks are spread over, in pixels.
    pub extent_px: f64,
}

impl TickRequest {
    /// Horizontal groups spread over the viewport width, all others over its height.
    #[must_use]
    pub fn extent_for(orientation: Orientation, viewport: &ResolvedViewport) -> f64 {
        match orientation {
            Orientation::Horizontal => viewport.width,
            Orientation::Vertical | Orientation::Radial | Orientation::Angular => viewport.height,
        }
    }

    #[must_use]
    pub fn interstep_count(self) -> f64 {
        if !self.extent_px.is_finite() || self.extent_px <= 0.0 {
            return 0.0;
        }
        self.extent_px / TICK_SPACING_PX
    }
}

/// Computes the auto tick sequence, ascending.
///
/// Fewer than one interstep yields exactly the two bounds. A linear request
/// needing more than 10 000 ticks fails with `InvalidData`.
pub fn computed_ticks(request: TickRequest) -> GridResult<Vec<f64>> {
    let range = request.range;
    if request.logarithmic {
        ensure_log_range(range.low, range.high)?;
    }
    if range.span() == 0.0 {
        return Ok(vec![range.low]);
    }

    let interstep_count = request.interstep_count();
    if interstep_count < 1.0 {
        return Ok(vec![range.low, range.high]);
    }

    if request.logarithmic {
        Ok(logarithmic_ticks(range, interstep_count))
    } else {
        linear_ticks(range, interstep_count)
    }
}

/// Resolves the final tick sequence of a group against its value source.
pub fn generate_ticks(
    request: TickRequest,
    source: &ValueSource,
    stats: &GridStats,
) -> GridResult<Vec<f64>> {
    if request.logarithmic {
        ensure_log_range(request.range.low, request.range.high)?;
    }
    let computed = match source {
        ValueSource::Explicit(_) => Vec::new(),
        ValueSource::Computed | ValueSource::Generator(_) => computed_ticks(request)?,
    };
    Ok(source.resolve(computed, stats))
}

fn linear_ticks(range: ValueRange, interstep_count: f64) -> GridResult<Vec<f64>> {
    let step = nice_step(range.span() / interstep_count.floor())?;
    let start_index = (range.low / step).round();
    let end_index = (range.high / step).round();
    let count = end_index - start_index + 1.0;
    if !count.is_finite() || count > MAX_COMPUTED_TICKS as f64 {
        warn!(
            low = range.low,
            high = range.high,
            step,
            count,
            "computed tick count exceeds limit"
        );
        return Err(GridError::InvalidData(format!(
            "range [{}, {}] needs {count} ticks of step {step}, limit is {MAX_COMPUTED_TICKS}",
            range.low, range.high
        )));
    }

    let mut ticks = Vec::with_capacity(count as usize);
    for k in 0..count as usize {
        let value = snap_to_step_precision((start_index + k as f64) * step, step);
        if value >= range.low && value <= range.high {
            ticks.push(value);
        }
    }
    Ok(ticks)
}

/// Per-decade multiples, thinned to the available interstep budget.
///
/// Bases `1..=9` when every decade fits, `{1, 2, 5}` when a third of them
/// fits, otherwise only decade starts with a stride that keeps the count
/// within the budget. Both bounds are always included. Strictly negative
/// ranges enumerate magnitudes.
fn logarithmic_ticks(range: ValueRange, interstep_count: f64) -> Vec<f64> {
    let negative = range.high < 0.0;
    let (low, high) = if negative {
        (-range.high, -range.low)
    } else {
        (range.low, range.high)
    };

    let first_decade = low.log10().floor() as i32;
    let last_decade = high.log10().floor() as i32;
    let decades = f64::from(last_decade - first_decade + 1);
    let budget = interstep_count + 1.0;

    let (bases, decade_stride): (SmallVec<[f64; 9]>, i32) = if decades * 9.0 <= budget {
        ((1..=9).map(f64::from).collect(), 1)
    } else if decades * 3.0 <= budget {
        (smallvec![1.0, 2.0, 5.0], 1)
    } else {
        let stride = (decades / interstep_count).ceil().max(1.0) as i32;
        (smallvec![1.0], stride)
    };

    let mut ticks = vec![low, high];
    let mut decade = first_decade;
    while decade <= last_decade {
        for base in &bases {
            let candidate = decade_multiple(*base, decade);
            if candidate >= low && candidate <= high {
                ticks.push(candidate);
            }
        }
        decade += decade_stride;
    }

    ticks.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
    ticks.dedup_by(|lhs, rhs| approx_equal(*lhs, *rhs));
    if negative {
        ticks = ticks.into_iter().rev().map(|value| -value).collect();
    }
    ticks
}

fn decade_multiple(base: f64, decade: i32) -> f64 {
    if decade >= 0 {
        base * pow10(decade)
    } else {
        base / pow10(-decade)
    }
}

fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}
