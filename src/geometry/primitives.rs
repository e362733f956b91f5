use egui::{Pos2, Rect};

use crate::surface::Surface;

/// Largest accepted corner rounding factor; a radius of half the short side is a pill
pub const MAX_ROUNDING_FACTOR: f32 = 0.5;

/// Stroke a rectangle spanned by two opposite corners.
///
/// `rounding` scales the corner radius relative to the shorter side and is
/// clamped to `[0, 0.5]`; 0 gives sharp corners.
pub fn draw_rect(surface: &mut dyn Surface, start: Pos2, end: Pos2, rounding: f32) {
    let rect = Rect::from_two_pos(start, end);
    surface.stroke_rect(rect, corner_radius(rect, rounding));
}

/// Corner radius for a rectangle with the given rounding factor
pub fn corner_radius(rect: Rect, rounding: f32) -> f32 {
    let rounding = rounding.clamp(0.0, MAX_ROUNDING_FACTOR);
    rect.width().min(rect.height()) * rounding
}

/// Stroke a straight segment
pub fn draw_line(surface: &mut dyn Surface, start: Pos2, end: Pos2) {
    surface.stroke_polyline(&[start, end]);
}

/// The two branch tips of an arrowhead sitting on `end`.
///
/// Each branch leaves `end` backwards along the line's axis, rotated by
/// `head_angle` radians to either side, and is `head_len` long.
pub fn arrow_head_points(start: Pos2, end: Pos2, head_len: f32, head_angle: f32) -> [Pos2; 2] {
    let axis = (end.y - start.y).atan2(end.x - start.x);
    let back = std::f32::consts::PI;
    let tip = |angle: f32| {
        Pos2::new(
            end.x + head_len * angle.cos(),
            end.y + head_len * angle.sin(),
        )
    };
    [tip(axis - head_angle + back), tip(axis + head_angle + back)]
}

/// Stroke a "V" arrowhead at `end`
pub fn draw_arrow_head(
    surface: &mut dyn Surface,
    start: Pos2,
    end: Pos2,
    head_len: f32,
    head_angle: f32,
) {
    let [left, right] = arrow_head_points(start, end, head_len, head_angle);
    surface.stroke_polyline(&[left, end, right]);
}

/// Snap `end` onto whichever axis through `start` has the larger delta.
///
/// Ties go to the vertical axis.
pub fn get_snap_point(start: Pos2, end: Pos2) -> Pos2 {
    if (end.x - start.x).abs() > (end.y - start.y).abs() {
        Pos2::new(end.x, start.y)
    } else {
        Pos2::new(start.x, end.y)
    }
}

/// Euclidean distance
pub fn get_distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}
