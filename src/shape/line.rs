use egui::Pos2;

use super::Shape;
use crate::geometry::hit_testing::segment_position;
use crate::geometry::{Position, draw_line, get_snap_point};
use crate::surface::Surface;

pub(super) fn render(shape: &Shape, surface: &mut dyn Surface) {
    draw_line(surface, shape.start(), visible_end(shape));
}

pub(super) fn position(shape: &Shape, point: Pos2) -> Option<Position> {
    segment_position(shape.start(), shape.end(), shape.styles().width, point)
}

pub(super) fn snapped_end(start: Pos2, end: Pos2) -> Pos2 {
    get_snap_point(start, end)
}

/// The end point as drawn, snapped to an axis while the modifier is held
pub(super) fn visible_end(shape: &Shape) -> Pos2 {
    if shape.special_render() {
        snapped_end(shape.start(), shape.end())
    } else {
        shape.end()
    }
}
