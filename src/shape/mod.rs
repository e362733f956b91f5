use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::id_generator::{ShapeId, generate_id};
use crate::style::Styles;
use crate::surface::Surface;

mod arrow;
mod circle;
mod line;
mod rectangle;

pub use arrow::{ARROW_HEAD_ANGLE, ARROW_HEAD_MAX_LEN, ARROW_HEAD_RATIO, arrow_head_len};
pub use rectangle::RECT_ROUNDING;

/// Side length of the square markers drawn on a selected shape's handles
pub const SELECTION_MARKER_SIZE: f32 = 6.0;

/// The drawable shape variants; fixed for a shape's whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "rect")]
    Rectangle,
    #[serde(rename = "circ")]
    Circle,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "arrw")]
    Arrow,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Line,
        ShapeKind::Arrow,
    ];

    /// The `type` tag used in exported scenes
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Circle => "circ",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrw",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Rectangles and circles span an area; lines and arrows join two endpoints
    pub fn is_area(&self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Circle)
    }

    /// Create a fresh, zero-sized shape of this kind at `point`
    pub fn generate(&self, point: Pos2, styles: Styles) -> Shape {
        Shape::new(*self, point, styles)
    }

    // Where the second anchor lands while the constrained-draw modifier is held
    fn constrain(&self, start: Pos2, end: Pos2) -> Pos2 {
        match self {
            ShapeKind::Rectangle | ShapeKind::Circle => rectangle::square_end(start, end),
            ShapeKind::Line | ShapeKind::Arrow => line::snapped_end(start, end),
        }
    }
}

/// A drawable shape.
///
/// Shapes are values: every mutator returns a new record and the scene swaps
/// it in by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    id: ShapeId,
    #[serde(rename = "type")]
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    styles: Styles,
    selected: bool,
    cursor_offset: Vec2,
    special_render: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind, point: Pos2, styles: Styles) -> Self {
        Self {
            id: generate_id(),
            kind,
            start: point,
            end: point,
            styles,
            selected: false,
            cursor_offset: Vec2::ZERO,
            special_render: false,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn cursor_offset(&self) -> Vec2 {
        self.cursor_offset
    }

    pub fn special_render(&self) -> bool {
        self.special_render
    }

    /// The box spanned by both anchors, whatever their order
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    /// Push this shape's styles onto the surface's paint state
    pub fn apply_styles(&self, surface: &mut dyn Surface) {
        surface.set_styles(&self.styles);
    }

    /// Replace styles wholesale
    pub fn with_styles(&self, styles: Styles) -> Self {
        Self { styles, ..self.clone() }
    }

    pub fn with_selected(&self, selected: bool) -> Self {
        Self { selected, ..self.clone() }
    }

    pub fn with_special_render(&self, special_render: bool) -> Self {
        Self { special_render, ..self.clone() }
    }

    /// Remember where the pointer grabbed the shape, relative to `start`
    pub fn with_offset(&self, point: Pos2) -> Self {
        Self {
            cursor_offset: point - self.start,
            ..self.clone()
        }
    }

    /// Drag the whole shape so the grip point follows `point`, keeping its size
    pub fn moved(&self, point: Pos2) -> Self {
        let start = point - self.cursor_offset;
        Self {
            start,
            end: start + (self.end - self.start),
            ..self.clone()
        }
    }

    /// Set both anchors, honouring the constrained-draw modifier
    pub fn transformed(&self, start: Pos2, end: Pos2) -> Self {
        let end = if self.special_render {
            self.kind.constrain(start, end)
        } else {
            end
        };
        Self { start, end, ..self.clone() }
    }

    /// Put area shapes into top-left / bottom-right form; endpoints keep their order
    pub fn normalized(&self) -> Self {
        if !self.kind.is_area() {
            return self.clone();
        }
        let rect = self.bounding_rect();
        Self {
            start: rect.min,
            end: rect.max,
            ..self.clone()
        }
    }

    /// Hit-test a point; `None` means no hit
    pub fn check_intersection(&self, point: Pos2) -> Option<Position> {
        match self.kind {
            ShapeKind::Rectangle | ShapeKind::Circle => rectangle::position(self, point),
            ShapeKind::Line | ShapeKind::Arrow => line::position(self, point),
        }
    }

    /// Draw the shape, plus its selection markers when selected.
    ///
    /// The surface's paint state is restored before returning.
    pub fn render(&self, surface: &mut dyn Surface) {
        let saved = surface.styles();
        self.apply_styles(surface);

        match self.kind {
            ShapeKind::Rectangle => rectangle::render(self, surface),
            ShapeKind::Circle => circle::render(self, surface),
            ShapeKind::Line => line::render(self, surface),
            ShapeKind::Arrow => arrow::render(self, surface),
        }

        if self.selected {
            surface.set_styles(&Styles::selection_marker());
            self.render_selection(surface);
        }
        surface.set_styles(&saved);
    }

    fn render_selection(&self, surface: &mut dyn Surface) {
        if self.kind.is_area() {
            let rect = self.bounding_rect();
            surface.stroke_rect(rect, 0.0);
            for handle in crate::geometry::Handle::ALL {
                let marker = Rect::from_center_size(
                    handle.anchor(rect),
                    Vec2::splat(SELECTION_MARKER_SIZE),
                );
                surface.fill_rect(marker, 0.0);
            }
        } else {
            let radius = Vec2::splat(SELECTION_MARKER_SIZE / 2.0);
            surface.fill_ellipse(self.start, radius);
            surface.fill_ellipse(self.end, radius);
        }
    }
}
