use eframe_whiteboard::scene::DEFAULT_FILE_NAME;
use eframe_whiteboard::{LineCap, Scene, SceneError, Shape, ShapeKind, Styles};
use egui::{Color32, Pos2};

fn create_shape(kind: ShapeKind, start: Pos2, end: Pos2, styles: Styles) -> Shape {
    kind.generate(start, styles).transformed(start, end)
}

fn sample_scene() -> Scene {
    let dashed = Styles {
        stroke_style: Color32::from_rgb(0x12, 0x34, 0x56),
        fill_style: Color32::from_rgb(255, 0, 0),
        width: 3.5,
        line_cap: LineCap::Square,
    };
    Scene::from(vec![
        create_shape(ShapeKind::Rectangle, Pos2::new(10.0, 10.0), Pos2::new(110.0, 60.0), dashed),
        create_shape(ShapeKind::Circle, Pos2::new(0.0, 0.0), Pos2::new(40.0, 30.0), Styles::default()),
        create_shape(ShapeKind::Line, Pos2::new(5.0, 5.0), Pos2::new(-20.0, 40.0), Styles::default()),
        create_shape(ShapeKind::Arrow, Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0), dashed)
            .with_selected(true),
    ])
}

fn assert_same_geometry(a: &Scene, b: &Scene) {
    assert_eq!(a.len(), b.len());
    for (left, right) in a.shapes().iter().zip(b.shapes()) {
        assert_eq!(left.kind(), right.kind());
        assert_eq!(left.start(), right.start());
        assert_eq!(left.end(), right.end());
        assert_eq!(left.styles(), right.styles());
    }
}

#[test]
fn test_export_import_round_trip() {
    let scene = sample_scene();
    let json = scene.to_json().unwrap();
    let restored = Scene::from_json(&json).unwrap();

    assert_same_geometry(&scene, &restored);
    // Imported shapes are fresh records
    assert!(restored.selected().is_none());
    assert_ne!(restored.shapes()[0].id(), scene.shapes()[0].id());
}

#[test]
fn test_export_format() {
    let scene = sample_scene();
    let value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 4);

    let first = &records[0];
    assert_eq!(first["type"], "rect");
    assert_eq!(first["start"]["x"], 10.0);
    assert_eq!(first["end"]["y"], 60.0);
    assert_eq!(first["styles"]["strokeStyle"], "#123456");
    assert_eq!(first["styles"]["fillStyle"], "#ff0000");
    assert_eq!(first["styles"]["width"], 3.5);
    assert_eq!(first["styles"]["lineCap"], "square");
    assert!(first.get("cursorOffset").is_some());
    assert!(first.get("specialRender").is_some());

    let tags: Vec<&str> = records.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(tags, ["rect", "circ", "line", "arrw"]);
    assert_eq!(records[3]["selected"], true);
}

#[test]
fn test_unknown_types_are_dropped() {
    let json = r##"[
        {"type": "rect", "start": {"x": 0, "y": 0}, "end": {"x": 10, "y": 10},
         "styles": {"strokeStyle": "#000", "fillStyle": "#0000", "width": 2, "lineCap": "round"}},
        {"type": "star", "start": {"x": 0, "y": 0}, "end": {"x": 10, "y": 10},
         "styles": {"strokeStyle": "#000", "fillStyle": "#0000", "width": 2, "lineCap": "round"}}
    ]"##;

    let scene = Scene::from_json(json).unwrap();
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.shapes()[0].kind(), ShapeKind::Rectangle);
    assert_eq!(scene.shapes()[0].styles().stroke_style, Color32::BLACK);
    assert_eq!(scene.shapes()[0].styles().fill_style, Color32::TRANSPARENT);
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(matches!(Scene::from_json("[{\"type\": "), Err(SceneError::Parse(_))));
    assert!(matches!(Scene::from_json("{}"), Err(SceneError::Parse(_))));
}

#[test]
fn test_empty_scene() {
    let json = Scene::new().to_json().unwrap();
    assert!(Scene::from_json(&json).unwrap().is_empty());
}

#[test]
fn test_save_and_load_file() {
    let dir = std::env::temp_dir().join(format!("eframe_whiteboard_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(DEFAULT_FILE_NAME);

    let scene = sample_scene();
    scene.save_to_path(&path).unwrap();
    let loaded = Scene::load_from_path(&path).unwrap();
    assert_same_geometry(&scene, &loaded);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_loading_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("eframe_whiteboard_does_not_exist.json");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(Scene::load_from_path(&path), Err(SceneError::Io(_))));
}
