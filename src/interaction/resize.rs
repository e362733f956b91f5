use egui::Pos2;

use crate::error::GestureError;
use crate::geometry::{Handle, Position};

/// New `(start, end)` anchors for a shape whose `position` is dragged to `current`.
///
/// Area shapes are expected in normalized form, `start` top-left and `end`
/// bottom-right, when the drag begins.
pub fn resize_anchors(
    position: Position,
    start: Pos2,
    end: Pos2,
    current: Pos2,
) -> Result<(Pos2, Pos2), GestureError> {
    let anchors = match position {
        Position::Handle(Handle::TopLeft) => (current, end),
        Position::Handle(Handle::TopRight) => {
            (Pos2::new(start.x, current.y), Pos2::new(current.x, end.y))
        }
        Position::Handle(Handle::BottomLeft) => {
            (Pos2::new(current.x, start.y), Pos2::new(end.x, current.y))
        }
        Position::Handle(Handle::BottomRight) => (start, current),
        Position::Handle(Handle::Top) => (Pos2::new(start.x, current.y), end),
        Position::Handle(Handle::Bottom) => (start, Pos2::new(end.x, current.y)),
        Position::Handle(Handle::Left) => (Pos2::new(current.x, start.y), end),
        Position::Handle(Handle::Right) => (start, Pos2::new(current.x, end.y)),
        Position::Start => (current, end),
        Position::End => (start, current),
        Position::Inside => {
            return Err(GestureError::InvalidState {
                action: "resize",
                state: "holding the shape body",
            });
        }
    };
    Ok(anchors)
}
