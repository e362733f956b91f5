use super::Shape;
use super::line::visible_end;
use crate::geometry::{draw_arrow_head, draw_line, get_distance};
use crate::surface::Surface;

/// Angle between the shaft and each head branch, in radians
pub const ARROW_HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;
/// Head length as a fraction of the shaft length
pub const ARROW_HEAD_RATIO: f32 = 0.3;
/// Upper bound on the head length, in pixels
pub const ARROW_HEAD_MAX_LEN: f32 = 50.0;

/// Head length for a shaft of the given length
pub fn arrow_head_len(shaft_len: f32) -> f32 {
    (shaft_len * ARROW_HEAD_RATIO).min(ARROW_HEAD_MAX_LEN)
}

pub(super) fn render(shape: &Shape, surface: &mut dyn Surface) {
    let start = shape.start();
    let end = visible_end(shape);
    draw_line(surface, start, end);

    let shaft_len = get_distance(start, end);
    if shaft_len > 0.0 {
        draw_arrow_head(surface, start, end, arrow_head_len(shaft_len), ARROW_HEAD_ANGLE);
    }
}
