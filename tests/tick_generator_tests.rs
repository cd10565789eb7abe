use plot_grid::GridError;
use plot_grid::api::{GridStats, TickRequest, ValueSource, computed_ticks, generate_ticks};
use plot_grid::core::{Orientation, ValueRange};

fn request(min: f64, max: f64, logarithmic: bool, extent_px: f64) -> TickRequest {
    TickRequest {
        range: ValueRange::from_bounds(min, max).expect("range"),
        logarithmic,
        orientation: Orientation::Horizontal,
        extent_px,
    }
}

fn stats_for(request: TickRequest) -> GridStats {
    GridStats::new(0, 1, request.orientation, request.logarithmic, request.range)
}

#[test]
fn linear_ticks_follow_nice_step() {
    let ticks = computed_ticks(request(0.0, 100.0, false, 500.0)).expect("ticks");
    assert_eq!(
        ticks,
        vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
    );
}

#[test]
fn reversed_bounds_produce_the_same_values() {
    let forward = computed_ticks(request(0.0, 100.0, false, 500.0)).expect("ticks");
    let reversed = computed_ticks(request(100.0, 0.0, false, 500.0)).expect("ticks");
    assert_eq!(forward, reversed);
}

#[test]
fn ticks_below_low_after_rounding_are_dropped() {
    let ticks = computed_ticks(request(0.3, 1.7, false, 400.0)).expect("ticks");
    assert_eq!(ticks, vec![0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.6]);
}

#[test]
fn ticks_straddle_zero() {
    let ticks = computed_ticks(request(-50.0, 50.0, false, 500.0)).expect("ticks");
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first(), Some(&-50.0));
    assert_eq!(ticks.last(), Some(&50.0));
    assert!(ticks.contains(&0.0));
}

#[test]
fn tiny_spans_keep_distinct_ticks_up_to_high() {
    let ticks = computed_ticks(request(0.0, 1e-16, false, 500.0)).expect("ticks");
    assert_eq!(ticks.len(), 11);
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&1e-16));
}

#[test]
fn oversized_linear_requests_fail_instead_of_truncating() {
    let err = computed_ticks(request(0.0, 100.0, false, 5e7)).expect_err("tick limit");
    assert!(matches!(err, GridError::InvalidData(_)));
}

#[test]
fn narrow_extent_yields_exactly_the_bounds() {
    let ticks = computed_ticks(request(3.0, 97.0, false, 30.0)).expect("ticks");
    assert_eq!(ticks, vec![3.0, 97.0]);

    let ticks = computed_ticks(request(3.0, 97.0, false, 0.0)).expect("ticks");
    assert_eq!(ticks, vec![3.0, 97.0]);
}

#[test]
fn zero_span_yields_single_value() {
    let ticks = computed_ticks(request(5.0, 5.0, false, 500.0)).expect("ticks");
    assert_eq!(ticks, vec![5.0]);
}

#[test]
fn logarithmic_ticks_thin_to_one_two_five() {
    let ticks = computed_ticks(request(1.0, 999.0, true, 500.0)).expect("ticks");
    assert_eq!(
        ticks,
        vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 999.0]
    );
}

#[test]
fn logarithmic_ticks_include_off_decade_bounds() {
    let ticks = computed_ticks(request(3.0, 70.0, true, 1000.0)).expect("ticks");
    assert_eq!(ticks.first(), Some(&3.0));
    assert_eq!(ticks.last(), Some(&70.0));
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(ticks.contains(&10.0));
}

#[test]
fn logarithmic_range_touching_zero_is_rejected() {
    let err = computed_ticks(request(0.0, 100.0, true, 500.0)).expect_err("zero bound");
    assert!(matches!(err, GridError::LogarithmicRangeSpansZero { .. }));

    let req = request(-1.0, 100.0, true, 500.0);
    let err = generate_ticks(req, &ValueSource::explicit(vec![1.0]), &stats_for(req))
        .expect_err("explicit values do not bypass the range check");
    assert!(matches!(
        err,
        GridError::LogarithmicRangeSpansZero { low, high } if low == -1.0 && high == 100.0
    ));
}

#[test]
fn explicit_values_replace_computed_ones() {
    let req = request(0.0, 100.0, false, 500.0);
    let ticks = generate_ticks(req, &ValueSource::explicit(vec![5.0, 15.0]), &stats_for(req))
        .expect("ticks");
    assert_eq!(ticks, vec![5.0, 15.0]);
}

#[test]
fn generator_maps_candidates_and_drops_none() {
    let req = request(0.0, 100.0, false, 500.0);
    let source = ValueSource::generator(|value, _index, _stats| {
        (value % 20.0 == 0.0).then_some(value)
    });
    let ticks = generate_ticks(req, &source, &stats_for(req)).expect("ticks");
    assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn generator_receives_index_and_stats() {
    let req = request(0.0, 10.0, false, 100.0);
    let source = ValueSource::generator(|value, index, stats| {
        assert_eq!(stats.high, 10.0);
        Some(value + index as f64)
    });
    let ticks = generate_ticks(req, &source, &stats_for(req)).expect("ticks");
    assert_eq!(ticks, vec![0.0, 6.0, 12.0]);
}

#[test]
fn vertical_and_polar_groups_use_viewport_height() {
    let viewport = plot_grid::core::ViewportSource::Container
        .resolve(plot_grid::core::ContainerSize::new(800.0, 200.0))
        .expect("viewport");
    assert_eq!(TickRequest::extent_for(Orientation::Horizontal, &viewport), 800.0);
    assert_eq!(TickRequest::extent_for(Orientation::Vertical, &viewport), 200.0);
    assert_eq!(TickRequest::extent_for(Orientation::Radial, &viewport), 200.0);
    assert_eq!(TickRequest::extent_for(Orientation::Angular, &viewport), 200.0);
}
