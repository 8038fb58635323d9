use mandelview_core::{
    ComplexPlane, EvaluatorConfig, Gesture, Raster, RenderMode, Transition, ViewerConfig,
};
use mandelview_render::{render, render_parallel, ColorMapper, Viewer, BLACK};

#[test]
fn end_to_end_default_frame() {
    let raster = Raster::new(200, 125).unwrap();
    let buffer = render(
        &ComplexPlane::default(),
        &EvaluatorConfig::default(),
        raster,
        &ColorMapper::default(),
    );

    assert_eq!(buffer.pixels.len(), 200 * 125);
    let black = buffer.pixels.iter().filter(|&&p| p == BLACK).count();
    assert!(black > 0, "the set itself should be black");
    assert!(black < buffer.pixels.len(), "the exterior should be coloured");
}

#[test]
fn render_determinism() {
    let raster = Raster::new(128, 96).unwrap();
    let plane = ComplexPlane::default();
    let evaluator = EvaluatorConfig::default();
    let mapper = ColorMapper::default();

    let a = render(&plane, &evaluator, raster, &mapper);
    let b = render(&plane, &evaluator, raster, &mapper);
    assert_eq!(a, b, "renders must be deterministic");
}

#[test]
fn modes_are_pixel_identical_after_navigation() {
    let seq_config = ViewerConfig {
        raster_width: 160,
        raster_height: 100,
        ..ViewerConfig::default()
    };
    let par_config = ViewerConfig {
        render_mode: RenderMode::Parallel,
        ..seq_config.clone()
    };
    let mut seq = Viewer::new(&seq_config).unwrap();
    let mut par = Viewer::new(&par_config).unwrap();

    for gesture in [
        Gesture::Click { x: 30, y: 50 },
        Gesture::Click { x: 90, y: 20 },
        Gesture::ZoomInPlace,
    ] {
        seq.handle(gesture).unwrap();
        par.handle(gesture).unwrap();
        assert_eq!(seq.frame(), par.frame());
    }
}

#[test]
fn click_at_centre_zooms_and_raises_budget() {
    let mut viewer = Viewer::new(&ViewerConfig::default()).unwrap();
    let t = viewer.handle(Gesture::Click { x: 400, y: 250 }).unwrap();
    assert_eq!(t, Transition::Redraw);

    let nav = viewer.navigation();
    let centre = nav.plane().center();
    assert!((centre.re - (-0.5)).abs() < 0.01);
    assert!((centre.im - (-0.5)).abs() < 0.01);
    assert!((nav.plane().width() - 1.5).abs() < 1e-12);
    assert!((nav.plane().height() - 1.0).abs() < 1e-12);
    assert_eq!(nav.evaluator().max_iterations, 40);

    let expected = render(
        nav.plane(),
        nav.evaluator(),
        viewer.raster(),
        &ColorMapper::default(),
    );
    assert_eq!(viewer.frame(), &expected);
}

#[test]
fn parallel_render_standalone() {
    let raster = Raster::new(64, 48).unwrap();
    let plane = ComplexPlane::new(-0.8, -0.7, 0.05, 0.15).unwrap();
    let evaluator = EvaluatorConfig::new(120).unwrap();
    let mapper = ColorMapper::default();
    assert_eq!(
        render(&plane, &evaluator, raster, &mapper),
        render_parallel(&plane, &evaluator, raster, &mapper)
    );
}
