use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Stroke, Vec2};

use crate::style::{LineCap, Styles};

/// A drawing target with a single current paint state.
///
/// Coordinates are surface-local: (0, 0) is the canvas origin. Every draw call
/// uses whatever styles were last pushed with [`Surface::set_styles`], so a
/// caller must push its own styles before drawing and restore the previous
/// ones afterwards.
pub trait Surface {
    /// The paint state currently in effect
    fn styles(&self) -> Styles;

    /// Replace the current paint state
    fn set_styles(&mut self, styles: &Styles);

    /// Erase everything drawn so far
    fn clear(&mut self);

    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32);

    fn fill_rect(&mut self, rect: Rect, corner_radius: f32);

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2);

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2);

    /// Stroke connected segments through `points`
    fn stroke_polyline(&mut self, points: &[Pos2]);
}

/// Draws onto an egui painter, offsetting local coordinates by the canvas origin
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
    background: Color32,
    styles: Styles,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            origin: canvas_rect.min.to_vec2(),
            background,
            styles: Styles::default(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin
    }

    fn stroke(&self) -> Stroke {
        self.styles.egui_stroke()
    }

    // egui strokes are always butt-ended, so caps are painted on top
    fn paint_caps(&self, points: &[Pos2]) {
        let half = self.styles.width / 2.0;
        match self.styles.line_cap {
            LineCap::Butt => {}
            LineCap::Round => {
                for pos in [points.first(), points.last()].into_iter().flatten() {
                    self.painter
                        .circle_filled(self.to_screen(*pos), half, self.styles.stroke_style);
                }
            }
            LineCap::Square => {
                let ends = [
                    points.first().zip(points.get(1)),
                    points.last().zip(points.len().checked_sub(2).and_then(|i| points.get(i))),
                ];
                for (end, neighbour) in ends.into_iter().flatten() {
                    let dir = (*end - *neighbour).normalized();
                    if !dir.x.is_finite() || !dir.y.is_finite() {
                        continue;
                    }
                    let from = self.to_screen(*end);
                    self.painter.line_segment([from, from + dir * half], self.stroke());
                }
            }
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn styles(&self) -> Styles {
        self.styles
    }

    fn set_styles(&mut self, styles: &Styles) {
        self.styles = *styles;
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, self.background);
    }

    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.painter
            .rect_stroke(rect.translate(self.origin), corner_radius, self.stroke());
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.painter
            .rect_filled(rect.translate(self.origin), corner_radius, self.styles.fill_style);
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2) {
        self.painter.add(EguiShape::ellipse_stroke(
            self.to_screen(center),
            radius,
            self.stroke(),
        ));
    }

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2) {
        self.painter.add(EguiShape::ellipse_filled(
            self.to_screen(center),
            radius,
            self.styles.fill_style,
        ));
    }

    fn stroke_polyline(&mut self, points: &[Pos2]) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(EguiShape::line(screen, self.stroke()));
        self.paint_caps(points);
    }
}

/// A single draw call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    StrokeRect { rect: Rect, corner_radius: f32, styles: Styles },
    FillRect { rect: Rect, corner_radius: f32, styles: Styles },
    StrokeEllipse { center: Pos2, radius: Vec2, styles: Styles },
    FillEllipse { center: Pos2, radius: Vec2, styles: Styles },
    StrokePolyline { points: Vec<Pos2>, styles: Styles },
}

/// A surface that keeps a log of draw calls instead of painting
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    styles: Styles,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn styles(&self) -> Styles {
        self.styles
    }

    fn set_styles(&mut self, styles: &Styles) {
        self.styles = *styles;
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.ops.push(DrawOp::StrokeRect { rect, corner_radius, styles: self.styles });
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.ops.push(DrawOp::FillRect { rect, corner_radius, styles: self.styles });
    }

    fn stroke_ellipse(&mut self, center: Pos2, radius: Vec2) {
        self.ops.push(DrawOp::StrokeEllipse { center, radius, styles: self.styles });
    }

    fn fill_ellipse(&mut self, center: Pos2, radius: Vec2) {
        self.ops.push(DrawOp::FillEllipse { center, radius, styles: self.styles });
    }

    fn stroke_polyline(&mut self, points: &[Pos2]) {
        self.ops.push(DrawOp::StrokePolyline { points: points.to_vec(), styles: self.styles });
    }
}
