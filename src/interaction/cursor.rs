use egui::CursorIcon;

use crate::geometry::Position;
use crate::shape::Shape;

/// Cursor shown while hovering `position` on `shape` with the selection tool
pub fn cursor_for_position(shape: &Shape, position: Position) -> CursorIcon {
    match position {
        Position::Inside => CursorIcon::Move,
        Position::Handle(handle) => handle.cursor_icon(),
        Position::Start | Position::End => endpoint_cursor(shape),
    }
}

// Resize arrows that follow the segment's direction
fn endpoint_cursor(shape: &Shape) -> CursorIcon {
    let delta = shape.end() - shape.start();
    if delta.y == 0.0 {
        CursorIcon::ResizeHorizontal
    } else if delta.x == 0.0 {
        CursorIcon::ResizeVertical
    } else if delta.x.signum() == delta.y.signum() {
        CursorIcon::ResizeNwSe
    } else {
        CursorIcon::ResizeNeSw
    }
}
