use egui::Pos2;

use super::Shape;
use crate::geometry::hit_testing::box_position;
use crate::geometry::{Position, draw_rect};
use crate::surface::Surface;

/// Corner rounding factor for rectangles; sharp corners
pub const RECT_ROUNDING: f32 = 0.0;

pub(super) fn render(shape: &Shape, surface: &mut dyn Surface) {
    if shape.styles().has_fill() {
        let rect = shape.bounding_rect();
        surface.fill_rect(
            rect,
            crate::geometry::primitives::corner_radius(rect, RECT_ROUNDING),
        );
    }
    draw_rect(surface, shape.start(), shape.end(), RECT_ROUNDING);
}

/// Shared by every area shape: handles first, then the bounding box
pub(super) fn position(shape: &Shape, point: Pos2) -> Option<Position> {
    box_position(shape.start(), shape.end(), point)
}

/// Lock the box to a square whose side follows the horizontal drag.
///
/// The vertical growth direction follows the pointer.
pub(super) fn square_end(start: Pos2, end: Pos2) -> Pos2 {
    let side = (end.x - start.x).abs();
    let dy = if end.y >= start.y { side } else { -side };
    Pos2::new(end.x, start.y + dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_end_keeps_direction() {
        let start = Pos2::new(0.0, 0.0);
        assert_eq!(square_end(start, Pos2::new(80.0, 30.0)), Pos2::new(80.0, 80.0));
        assert_eq!(square_end(start, Pos2::new(80.0, -30.0)), Pos2::new(80.0, -80.0));
        assert_eq!(square_end(start, Pos2::new(-40.0, 10.0)), Pos2::new(-40.0, 40.0));
    }
}
