use std::f32::consts::PI;

use eframe_whiteboard::geometry::{arrow_head_points, get_distance, get_snap_point};
use eframe_whiteboard::surface::{DrawOp, RecordingSurface};
use eframe_whiteboard::{ShapeKind, Styles};
use egui::Pos2;

const EPSILON: f32 = 1e-4;

fn assert_close(a: Pos2, b: Pos2) {
    assert!(
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
        "{a:?} != {b:?}"
    );
}

#[test]
fn test_horizontal_arrow_head() {
    let [left, right] = arrow_head_points(Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0), 30.0, PI / 6.0);

    let x = 100.0 - 30.0 * (PI / 6.0).cos();
    let dy = 30.0 * (PI / 6.0).sin();
    assert_close(left, Pos2::new(x, dy));
    assert_close(right, Pos2::new(x, -dy));
}

#[test]
fn test_arrow_head_follows_direction() {
    // Pointing straight down, the branches sit above the tip
    let [left, right] = arrow_head_points(Pos2::new(0.0, 0.0), Pos2::new(0.0, 100.0), 20.0, PI / 4.0);
    assert!(left.y < 100.0 && right.y < 100.0);
    assert!((left.x + right.x).abs() < EPSILON);
    assert!((get_distance(left, Pos2::new(0.0, 100.0)) - 20.0).abs() < EPSILON);
}

#[test]
fn test_arrow_renders_shaft_then_head() {
    let start = Pos2::new(0.0, 0.0);
    let end = Pos2::new(100.0, 0.0);
    let arrow = ShapeKind::Arrow.generate(start, Styles::default()).transformed(start, end);

    let mut surface = RecordingSurface::new();
    arrow.render(&mut surface);

    let ops = surface.ops();
    assert_eq!(ops.len(), 2);
    match &ops[0] {
        DrawOp::StrokePolyline { points, .. } => assert_eq!(points, &vec![start, end]),
        other => panic!("expected the shaft, got {other:?}"),
    }
    match &ops[1] {
        DrawOp::StrokePolyline { points, .. } => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[1], end);
            // Head length is 0.3 of a 100px shaft
            assert!((get_distance(points[0], end) - 30.0).abs() < EPSILON);
        }
        other => panic!("expected the head, got {other:?}"),
    }
}

#[test]
fn test_zero_length_arrow_has_no_head() {
    let point = Pos2::new(5.0, 5.0);
    let arrow = ShapeKind::Arrow.generate(point, Styles::default());

    let mut surface = RecordingSurface::new();
    arrow.render(&mut surface);
    assert_eq!(surface.ops().len(), 1);
}

#[test]
fn test_snap_point() {
    let start = Pos2::new(10.0, 10.0);
    assert_eq!(get_snap_point(start, Pos2::new(50.0, 20.0)), Pos2::new(50.0, 10.0));
    assert_eq!(get_snap_point(start, Pos2::new(15.0, -40.0)), Pos2::new(10.0, -40.0));
}

#[test]
fn test_distance() {
    assert!((get_distance(Pos2::new(0.0, 0.0), Pos2::new(3.0, 4.0)) - 5.0).abs() < EPSILON);
}
