use super::*;
use crate::render::recording::RecordingPainter;

fn builtin_frame(cfg: &DashboardConfig) -> Frame {
    render_with(cfg, FontBook::builtin_only()).unwrap()
}

fn rgb(c: crate::foundation::core::Rgba8) -> [u8; 3] {
    [c.r, c.g, c.b]
}

#[test]
fn every_panel_is_painted() {
    let layout = compute_layout(&DashboardConfig::default()).unwrap();
    let mut p = RecordingPainter::new(1920, 1080);
    render_dashboard(&mut p, &layout).unwrap();

    for title in [
        LINE_CHART_TITLE,
        DONUT_TITLE,
        BAR_CHART_TITLE,
        MAP_TITLE,
        ACTIVITY_TITLE,
        TABLE_TITLE,
    ] {
        assert!(p.text_op(title).is_some(), "missing {title}");
    }
    for kpi in &DEFAULT_KPIS {
        assert!(p.text_op(kpi.value).is_some(), "missing {}", kpi.value);
    }
    assert!(p.text_op("UniTrade").is_some());
    assert!(p.text_op("Magic Unicorn Dashboard").is_some());
}

#[test]
fn layout_larger_than_surface_is_rejected_before_drawing() {
    let layout = compute_layout(&DashboardConfig::default()).unwrap();
    let mut p = RecordingPainter::new(1280, 720);
    let err = render_dashboard(&mut p, &layout).unwrap_err();
    assert!(matches!(err, WireframeError::Render(_)), "{err}");
    assert!(p.ops.is_empty());
}

#[test]
fn rendered_frame_has_canvas_size_and_palette() {
    let frame = builtin_frame(&DashboardConfig::default());
    assert_eq!((frame.width, frame.height), (1920, 1080));
    assert_eq!(frame.rgb8.len(), 1920 * 1080 * 3);

    assert_eq!(frame.pixel(10, 500), Some(rgb(style::SIDEBAR)));
    // Gutter between the first two KPI cards.
    assert_eq!(frame.pixel(695, 140), Some(rgb(style::BACKGROUND)));
    // Inside the table card, clear of text and stripes.
    assert_eq!(frame.pixel(1800, 1040), Some(rgb(style::CARD)));
}

#[test]
fn rendering_is_deterministic() {
    let cfg = DashboardConfig::default();
    let a = builtin_frame(&cfg);
    let b = builtin_frame(&cfg);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert!(a == b);
}

#[test]
fn invalid_config_fails_before_rasterizing() {
    let cfg = DashboardConfig {
        sidebar_width: 5000,
        ..DashboardConfig::default()
    };
    assert!(render_with(&cfg, FontBook::builtin_only()).is_err());
}

#[test]
fn default_path_sits_next_to_the_executable() {
    let cfg = DashboardConfig::default();
    let path = default_output_path(&cfg).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("unicorn_dashboard_wireframe.png")
    );
    let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
    assert_eq!(path.parent(), Some(exe_dir.as_path()));
}
