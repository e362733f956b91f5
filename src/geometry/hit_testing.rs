use egui::{CursorIcon, Pos2, Rect};
use serde::{Deserialize, Serialize};

use super::primitives::get_distance;

/// Half-size of the square grab zone around each 2D resize handle
pub const HANDLE_OFFSET: f32 = 10.0;
/// Grab radius around the endpoints of a line or arrow
pub const ENDPOINT_OFFSET: f32 = 4.0;
/// Extra slack allowed when testing a point against a segment's body
pub const SEGMENT_SLACK: f32 = 4.0;

/// One of the eight grab points on a 2D shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Handle {
    /// Handles in hit-test order
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::Top,
        Handle::TopRight,
        Handle::Left,
        Handle::Right,
        Handle::BottomLeft,
        Handle::Bottom,
        Handle::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::TopLeft => "tl",
            Handle::Top => "t",
            Handle::TopRight => "tr",
            Handle::Left => "l",
            Handle::Right => "r",
            Handle::BottomLeft => "bl",
            Handle::Bottom => "b",
            Handle::BottomRight => "br",
        }
    }

    /// Where this handle sits on `rect`
    pub fn anchor(&self, rect: Rect) -> Pos2 {
        match self {
            Handle::TopLeft => rect.left_top(),
            Handle::Top => rect.center_top(),
            Handle::TopRight => rect.right_top(),
            Handle::Left => rect.left_center(),
            Handle::Right => rect.right_center(),
            Handle::BottomLeft => rect.left_bottom(),
            Handle::Bottom => rect.center_bottom(),
            Handle::BottomRight => rect.right_bottom(),
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Handle::TopLeft | Handle::BottomRight => CursorIcon::ResizeNwSe,
            Handle::TopRight | Handle::BottomLeft => CursorIcon::ResizeNeSw,
            Handle::Top | Handle::Bottom => CursorIcon::ResizeVertical,
            Handle::Left | Handle::Right => CursorIcon::ResizeHorizontal,
        }
    }
}

/// Where a point landed on a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// On a 2D resize handle
    Handle(Handle),
    /// On the first endpoint of a line or arrow
    Start,
    /// On the second endpoint of a line or arrow
    End,
    /// On the body of the shape
    Inside,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Handle(handle) => handle.as_str(),
            Position::Start => "start",
            Position::End => "end",
            Position::Inside => "in",
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, Position::Inside)
    }
}

/// True when `point` lies in the square of half-size `offset` centred on `anchor`
pub fn is_near(point: Pos2, anchor: Pos2, offset: f32) -> bool {
    (point.x - anchor.x).abs() <= offset && (point.y - anchor.y).abs() <= offset
}

/// Hit-test an axis-aligned box given by any two opposite corners.
///
/// Handles win over the interior so a click on a corner resizes instead of moving.
pub fn box_position(start: Pos2, end: Pos2, point: Pos2) -> Option<Position> {
    let rect = Rect::from_two_pos(start, end);
    if let Some(handle) = Handle::ALL
        .into_iter()
        .find(|handle| is_near(point, handle.anchor(rect), HANDLE_OFFSET))
    {
        return Some(Position::Handle(handle));
    }
    rect.contains(point).then_some(Position::Inside)
}

/// Hit-test a stroked segment of the given width
pub fn segment_position(start: Pos2, end: Pos2, width: f32, point: Pos2) -> Option<Position> {
    if get_distance(start, point) <= ENDPOINT_OFFSET {
        return Some(Position::Start);
    }
    if get_distance(end, point) <= ENDPOINT_OFFSET {
        return Some(Position::End);
    }

    let detour = get_distance(start, point) + get_distance(point, end);
    let allowed = get_distance(start, end) + width + SEGMENT_SLACK;
    (detour <= allowed).then_some(Position::Inside)
}
