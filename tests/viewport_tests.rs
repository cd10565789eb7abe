use plot_grid::GridError;
use plot_grid::api::{GridConfig, GridOverlay, GridUpdate, LinesGroupConfig};
use plot_grid::core::{ContainerSize, Orientation, ViewportLength, ViewportRect, ViewportSource};
use plot_grid::render::MemoryRenderer;

fn config(viewport: ViewportSource) -> GridConfig {
    GridConfig::new()
        .with_viewport(viewport)
        .with_lines_group(LinesGroupConfig::new(Orientation::Horizontal, 0.0, 100.0))
}

#[test]
fn container_viewport_covers_the_container() {
    let overlay = GridOverlay::new(
        MemoryRenderer::new(ContainerSize::new(800.0, 600.0)),
        config(ViewportSource::Container),
    )
    .expect("overlay init");

    let viewport = overlay.viewport().expect("viewport");
    assert_eq!((viewport.width, viewport.height), (800.0, 600.0));
    assert_eq!(
        overlay.renderer().overlay(),
        Some(&ViewportRect::new(0.0, 0.0, 800.0, 600.0))
    );
}

#[test]
fn fixed_viewport_resolves_css_lengths() {
    let rect = ViewportRect::new("10%", 0.0, "50%", "200px");
    let overlay = GridOverlay::new(
        MemoryRenderer::new(ContainerSize::new(800.0, 600.0)),
        config(ViewportSource::Fixed(rect.clone())),
    )
    .expect("overlay init");

    let viewport = overlay.viewport().expect("viewport");
    assert_eq!((viewport.width, viewport.height), (400.0, 200.0));
    assert_eq!(overlay.renderer().overlay(), Some(&rect));
    assert_eq!(rect.x.to_css(), "10%");
    assert_eq!(rect.y.to_css(), "0px");
    // 400 px: eight intersteps, a raw step of 12.5 rounds to 10.
    assert_eq!(overlay.group_stats()[0].values.len(), 11);
}

#[test]
fn computed_viewport_follows_container_resizes() {
    let source = ViewportSource::computed(|width, height| {
        ViewportRect::new(0.0, 0.0, width / 2.0, height)
    });
    let mut overlay = GridOverlay::new(
        MemoryRenderer::new(ContainerSize::new(1000.0, 400.0)),
        config(source),
    )
    .expect("overlay init");
    assert_eq!(overlay.viewport().expect("viewport").width, 500.0);

    overlay
        .renderer_mut()
        .set_container_size(ContainerSize::new(200.0, 400.0));
    overlay.refresh().expect("refresh");

    assert_eq!(overlay.viewport().expect("viewport").width, 100.0);
    assert_eq!(overlay.group_stats()[0].values, vec![0.0, 50.0, 100.0]);
}

#[test]
fn unparseable_lengths_fall_back_to_the_container_extent() {
    let length = ViewportLength::from("calc(100% - 10px)");
    assert_eq!(length.resolve_px(640.0), 640.0);
    assert_eq!(ViewportLength::from(12.0).resolve_px(640.0), 12.0);
}

#[test]
fn invalid_container_is_rejected() {
    let err = GridOverlay::new(
        MemoryRenderer::new(ContainerSize::new(f64::NAN, 100.0)),
        config(ViewportSource::Container),
    )
    .err()
    .expect("nan container");
    assert!(matches!(err, GridError::InvalidViewport { .. }));
}

#[test]
fn negative_viewport_extent_is_rejected_on_update() {
    let mut overlay = GridOverlay::new(
        MemoryRenderer::new(ContainerSize::new(800.0, 600.0)),
        config(ViewportSource::Container),
    )
    .expect("overlay init");

    let err = overlay
        .update(GridUpdate::new().with_viewport(ViewportSource::Fixed(ViewportRect::new(
            0.0, 0.0, -5.0, 100.0,
        ))))
        .expect_err("negative width");
    assert!(matches!(
        err,
        GridError::InvalidViewport { width, .. } if width == -5.0
    ));
}
