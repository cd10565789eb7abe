use approx::assert_relative_eq;
use plot_grid::api::{label_layout, line_layout, offset_percent};
use plot_grid::core::{ContainerSize, Orientation, ResolvedViewport, ValueRange, ViewportSource};
use plot_grid::render::{BoundaryMarker, Length, StyleMap, StyleValue};

fn viewport(width: f64, height: f64) -> ResolvedViewport {
    ViewportSource::Container
        .resolve(ContainerSize::new(width, height))
        .expect("viewport")
}

fn percent(length: Option<Length>) -> f64 {
    match length {
        Some(Length::Percent(value)) => value,
        other => panic!("expected percent length, got {other:?}"),
    }
}

fn px(length: Option<Length>) -> f64 {
    match length {
        Some(Length::Px(value)) => value,
        other => panic!("expected pixel length, got {other:?}"),
    }
}

#[test]
fn offset_percent_mirrors_inverted_ranges() {
    let forward = ValueRange::from_bounds(0.0, 100.0).expect("range");
    let inverted = ValueRange::from_bounds(100.0, 0.0).expect("range");

    assert_relative_eq!(offset_percent(25.0, forward, false).expect("offset"), 25.0);
    assert_relative_eq!(offset_percent(25.0, inverted, false).expect("offset"), 75.0);
}

#[test]
fn offset_percent_on_log_range() {
    let range = ValueRange::from_bounds(1.0, 100.0).expect("range");
    assert_relative_eq!(offset_percent(10.0, range, true).expect("offset"), 50.0);

    let spanning = ValueRange::from_bounds(-1.0, 100.0).expect("range");
    assert!(offset_percent(10.0, spanning, true).is_err());
}

#[test]
fn horizontal_lines_offset_from_the_left() {
    let layout = line_layout(
        Orientation::Horizontal,
        25.0,
        &viewport(500.0, 300.0),
        BoundaryMarker::None,
        None,
        &StyleMap::new(),
    );
    let position = layout.position.expect("position");
    assert_relative_eq!(percent(position.left), 25.0);
    assert!(position.top.is_none());
    assert!(layout.size.is_none());
}

#[test]
fn vertical_lines_increase_upward() {
    let layout = line_layout(
        Orientation::Vertical,
        25.0,
        &viewport(500.0, 300.0),
        BoundaryMarker::None,
        None,
        &StyleMap::new(),
    );
    let position = layout.position.expect("position");
    assert!(position.left.is_none());
    assert_relative_eq!(percent(position.top), 75.0);
}

#[test]
fn radial_lines_are_centered_rings() {
    let layout = line_layout(
        Orientation::Radial,
        50.0,
        &viewport(400.0, 200.0),
        BoundaryMarker::None,
        None,
        &StyleMap::new(),
    );
    let position = layout.position.expect("position");
    let size = layout.size.expect("size");
    assert_relative_eq!(size.width_px, 100.0);
    assert_relative_eq!(size.height_px, 100.0);
    assert_relative_eq!(px(position.left), 150.0);
    assert_relative_eq!(px(position.top), 50.0);
    assert_eq!(layout.corner_radius_px, Some(200.0));
}

#[test]
fn angular_lines_rotate_around_the_center() {
    let layout = line_layout(
        Orientation::Angular,
        25.0,
        &viewport(400.0, 400.0),
        BoundaryMarker::None,
        None,
        &StyleMap::new(),
    );
    let position = layout.position.expect("position");
    assert_relative_eq!(px(position.left), 0.0);
    assert_relative_eq!(percent(position.top), 50.0);
    assert_relative_eq!(layout.rotation_deg.expect("rotation"), 90.0);
}

#[test]
fn boundary_title_and_style_are_carried() {
    let mut style = StyleMap::new();
    style.insert("border-width".to_owned(), StyleValue::Number(2.0));

    let layout = line_layout(
        Orientation::Horizontal,
        0.0,
        &viewport(500.0, 300.0),
        BoundaryMarker::for_value(0.0, 0.0, 100.0),
        Some("0".to_owned()),
        &style,
    );
    assert_eq!(layout.boundary, BoundaryMarker::Min);
    assert_eq!(layout.title.as_deref(), Some("0"));
    assert_eq!(layout.style_overrides, style);
    assert_eq!(
        layout.style_overrides["border-width"].to_css(),
        "2px".to_owned()
    );
    layout.validate().expect("valid layout");
}

#[test]
fn boundary_markers_follow_range_bounds() {
    assert_eq!(BoundaryMarker::for_value(0.0, 0.0, 10.0), BoundaryMarker::Min);
    assert_eq!(BoundaryMarker::for_value(10.0, 0.0, 10.0), BoundaryMarker::Max);
    assert_eq!(BoundaryMarker::for_value(5.0, 0.0, 10.0), BoundaryMarker::None);
    assert_eq!(BoundaryMarker::for_value(5.0, 5.0, 5.0), BoundaryMarker::Both);
}

#[test]
fn labels_are_placed_only_on_linear_orientations() {
    let horizontal = label_layout(Orientation::Horizontal, 40.0).expect("layout");
    assert_relative_eq!(percent(horizontal.position.expect("position").left), 40.0);

    let vertical = label_layout(Orientation::Vertical, 40.0).expect("layout");
    assert_relative_eq!(percent(vertical.position.expect("position").top), 60.0);

    assert!(label_layout(Orientation::Radial, 40.0).is_none());
    assert!(label_layout(Orientation::Angular, 40.0).is_none());
    assert!(label_layout(Orientation::Horizontal, f64::NAN).is_none());
}
