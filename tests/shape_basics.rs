use eframe_whiteboard::surface::{DrawOp, RecordingSurface, Surface};
use eframe_whiteboard::{Handle, LineCap, Position, Shape, ShapeKind, Styles};
use egui::{Color32, Pos2, Vec2};

fn create_shape(kind: ShapeKind, start: Pos2, end: Pos2) -> Shape {
    kind.generate(start, Styles::default()).transformed(start, end)
}

#[test]
fn test_rectangle_hit_testing() {
    let rect = create_shape(
        ShapeKind::Rectangle,
        Pos2::new(10.0, 10.0),
        Pos2::new(110.0, 60.0),
    );

    assert_eq!(rect.check_intersection(Pos2::new(60.0, 35.0)), Some(Position::Inside));
    assert_eq!(
        rect.check_intersection(Pos2::new(10.0, 10.0)),
        Some(Position::Handle(Handle::TopLeft))
    );
    assert_eq!(rect.check_intersection(Pos2::new(500.0, 500.0)), None);
}

#[test]
fn test_handles_reach_outside_the_box() {
    let rect = create_shape(
        ShapeKind::Circle,
        Pos2::new(10.0, 10.0),
        Pos2::new(110.0, 60.0),
    );

    // Within the handle offset of the bottom-right corner, but outside the box
    assert_eq!(
        rect.check_intersection(Pos2::new(118.0, 68.0)),
        Some(Position::Handle(Handle::BottomRight))
    );
    assert_eq!(
        rect.check_intersection(Pos2::new(60.0, 62.0)),
        Some(Position::Handle(Handle::Bottom))
    );
    assert_eq!(rect.check_intersection(Pos2::new(125.0, 35.0)), None);
}

#[test]
fn test_line_hit_testing() {
    let line = create_shape(ShapeKind::Line, Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0));

    assert_eq!(line.check_intersection(Pos2::new(1.0, 1.0)), Some(Position::Start));
    assert_eq!(line.check_intersection(Pos2::new(99.0, 0.0)), Some(Position::End));
    assert_eq!(line.check_intersection(Pos2::new(50.0, 3.0)), Some(Position::Inside));
    assert_eq!(line.check_intersection(Pos2::new(50.0, 30.0)), None);
}

#[test]
fn test_normalize_is_idempotent() {
    let rect = create_shape(
        ShapeKind::Rectangle,
        Pos2::new(110.0, 60.0),
        Pos2::new(10.0, 10.0),
    );

    let once = rect.normalized();
    let twice = once.normalized();
    assert_eq!(once.start(), Pos2::new(10.0, 10.0));
    assert_eq!(once.end(), Pos2::new(110.0, 60.0));
    assert_eq!(twice.start(), once.start());
    assert_eq!(twice.end(), once.end());
}

#[test]
fn test_normalize_leaves_segments_alone() {
    let arrow = create_shape(ShapeKind::Arrow, Pos2::new(50.0, 50.0), Pos2::new(0.0, 0.0));
    let normalized = arrow.normalized();
    assert_eq!(normalized.start(), Pos2::new(50.0, 50.0));
    assert_eq!(normalized.end(), Pos2::new(0.0, 0.0));
}

#[test]
fn test_move_keeps_grip_and_size() {
    let rect = create_shape(ShapeKind::Rectangle, Pos2::new(0.0, 0.0), Pos2::new(10.0, 20.0));

    let gripped = rect.with_offset(Pos2::new(5.0, 5.0));
    assert_eq!(gripped.cursor_offset(), Vec2::new(5.0, 5.0));

    let moved = gripped.moved(Pos2::new(100.0, 100.0));
    assert_eq!(moved.start(), Pos2::new(95.0, 95.0));
    assert_eq!(moved.end(), Pos2::new(105.0, 115.0));
    // Moving returns a new value
    assert_eq!(rect.start(), Pos2::new(0.0, 0.0));
}

#[test]
fn test_constrained_circle_renders_round() {
    let origin = Pos2::new(0.0, 0.0);
    let circle = ShapeKind::Circle
        .generate(origin, Styles::default())
        .with_special_render(true)
        .transformed(origin, Pos2::new(80.0, 30.0));

    let mut surface = RecordingSurface::new();
    circle.render(&mut surface);

    match &surface.ops()[0] {
        DrawOp::StrokeEllipse { radius, .. } => assert_eq!(radius.x, radius.y),
        other => panic!("expected an ellipse, got {other:?}"),
    }
}

#[test]
fn test_constrained_square_grows_upwards() {
    let origin = Pos2::new(0.0, 0.0);
    let rect = ShapeKind::Rectangle
        .generate(origin, Styles::default())
        .with_special_render(true)
        .transformed(origin, Pos2::new(40.0, -10.0));

    assert_eq!(rect.end(), Pos2::new(40.0, -40.0));
}

#[test]
fn test_constrained_line_snaps_to_axis() {
    let origin = Pos2::new(0.0, 0.0);
    let line = ShapeKind::Line
        .generate(origin, Styles::default())
        .with_special_render(true);

    assert_eq!(line.transformed(origin, Pos2::new(80.0, 30.0)).end(), Pos2::new(80.0, 0.0));
    assert_eq!(line.transformed(origin, Pos2::new(10.0, -30.0)).end(), Pos2::new(0.0, -30.0));
}

#[test]
fn test_with_styles_replaces_everything() {
    let line = create_shape(ShapeKind::Line, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0));
    let styles = Styles {
        stroke_style: Color32::RED,
        fill_style: Color32::BLUE,
        width: 5.0,
        line_cap: LineCap::Square,
    };

    let restyled = line.with_styles(styles);
    assert_eq!(*restyled.styles(), styles);
    assert_eq!(restyled.id(), line.id());
}

#[test]
fn test_filled_rectangle_fills_before_stroking() {
    let styles = Styles {
        fill_style: Color32::YELLOW,
        ..Styles::default()
    };
    let rect = ShapeKind::Rectangle
        .generate(Pos2::new(0.0, 0.0), styles)
        .transformed(Pos2::new(0.0, 0.0), Pos2::new(30.0, 20.0));

    let mut surface = RecordingSurface::new();
    rect.render(&mut surface);

    let ops = surface.take_ops();
    assert!(matches!(ops[0], DrawOp::FillRect { .. }));
    assert!(matches!(ops[1], DrawOp::StrokeRect { .. }));
    assert_eq!(ops.len(), 2);
}

#[test]
fn test_selected_shape_draws_markers_in_marker_style() {
    let rect = create_shape(ShapeKind::Rectangle, Pos2::new(0.0, 0.0), Pos2::new(30.0, 20.0))
        .with_selected(true);

    let mut surface = RecordingSurface::new();
    rect.render(&mut surface);

    let markers: Vec<&DrawOp> = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::FillRect { .. }))
        .collect();
    assert_eq!(markers.len(), 8);
    for op in markers {
        if let DrawOp::FillRect { styles, .. } = op {
            assert_eq!(*styles, Styles::selection_marker());
        }
    }
    assert_eq!(surface.styles(), Styles::default());
}
