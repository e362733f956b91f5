use egui::Vec2;

use super::Shape;
use crate::surface::Surface;

/// Ellipse inscribed in the bounding box; a circle while the modifier is held
pub(super) fn render(shape: &Shape, surface: &mut dyn Surface) {
    let rect = shape.bounding_rect();
    let rx = rect.width() / 2.0;
    let ry = if shape.special_render() { rx } else { rect.height() / 2.0 };
    let radius = Vec2::new(rx, ry);

    if shape.styles().has_fill() {
        surface.fill_ellipse(rect.center(), radius);
    }
    surface.stroke_ellipse(rect.center(), radius);
}
