use crate::error::{GridError, GridResult};

/// Multipliers of the power-of-ten order considered "nice" for linear steps.
pub const NICE_STEP_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Returns the power-of-ten magnitude of `value` (`order_of_magnitude(0.037) == 0.01`).
///
/// Zero and non-finite inputs have no magnitude and yield `None`.
#[must_use]
pub fn order_of_magnitude(value: f64) -> Option<f64> {
    if !value.is_finite() || value == 0.0 {
        return None;
    }
    let exponent = value.abs().log10().floor() as i32;
    Some(pow10(exponent))
}

/// Picks the candidate nearest to `value`.
///
/// Ties keep the earliest candidate in iteration order.
#[must_use]
pub fn closest_candidate(value: f64, candidates: &[f64]) -> Option<f64> {
    let mut iter = candidates.iter().copied();
    let mut best = iter.next()?;
    let mut best_distance = (value - best).abs();
    for candidate in iter {
        let distance = (value - candidate).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    Some(best)
}

/// Rounds a raw step size to the closest `{1, 2, 2.5, 5, 10} × 10^order` value.
pub fn nice_step(raw_step: f64) -> GridResult<f64> {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return Err(GridError::InvalidData(format!(
            "raw step must be finite and > 0, got {raw_step}"
        )));
    }
    let order = order_of_magnitude(raw_step).ok_or_else(|| {
        GridError::InvalidData(format!("raw step {raw_step} has no order of magnitude"))
    })?;

    let candidates = NICE_STEP_MULTIPLIERS.map(|multiplier| multiplier * order);
    closest_candidate(raw_step, &candidates)
        .ok_or_else(|| GridError::InvalidData("nice-step candidate set is empty".to_owned()))
}

/// Linear offset ratio of `value` inside `[low, high]`.
///
/// A zero-width range maps every value to `0`.
#[must_use]
pub fn linear_ratio(value: f64, low: f64, high: f64) -> f64 {
    let span = high - low;
    if span == 0.0 {
        return 0.0;
    }
    (value - low) / span
}

/// Logarithmic offset ratio of `value` inside `[low, high]`.
///
/// Ranges that span or touch zero are rejected. Strictly negative ranges are
/// mapped on magnitudes so that `low` still maps to `0` and `high` to `1`.
pub fn log_ratio(value: f64, low: f64, high: f64) -> GridResult<f64> {
    ensure_log_range(low, high)?;

    let (value, low, high) = if high < 0.0 {
        (value.abs(), low.abs(), high.abs())
    } else {
        (value, low, high)
    };
    let span = high.log10() - low.log10();
    if span == 0.0 {
        return Ok(0.0);
    }
    Ok((value.log10() - low.log10()) / span)
}

/// Fails when a logarithmic range spans or includes zero.
pub fn ensure_log_range(low: f64, high: f64) -> GridResult<()> {
    if low <= 0.0 && high >= 0.0 {
        return Err(GridError::LogarithmicRangeSpansZero { low, high });
    }
    Ok(())
}

/// Inclusive containment test.
#[must_use]
pub fn contains(value: f64, low: f64, high: f64) -> bool {
    value >= low && value <= high
}

/// Snaps `value` to the decimal precision implied by `step`.
///
/// Accumulated products such as `3.0 * 0.1` otherwise leak binary noise
/// (`0.30000000000000004`) into tick values and identity keys. The decimal
/// count follows the step's own order, however small.
#[must_use]
pub fn snap_to_step_precision(value: f64, step: f64) -> f64 {
    let Some(order) = order_of_magnitude(step) else {
        return value;
    };
    let decimals = (-order.log10().round() as i32 + 2).clamp(0, f64::MAX_10_EXP);
    let factor = pow10(decimals);
    let snapped = (value * factor).round() / factor;
    if snapped.is_finite() { snapped } else { value }
}

/// `10^exponent`, dividing for negative exponents to keep decimal values exact.
#[must_use]
pub fn pow10(exponent: i32) -> f64 {
    if exponent >= 0 {
        10_f64.powi(exponent)
    } else {
        1.0 / 10_f64.powi(-exponent)
    }
}
