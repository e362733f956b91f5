use egui::Pos2;
use log::debug;

use crate::geometry::Position;
use crate::id_generator::ShapeId;
use crate::shape::Shape;
use crate::surface::Surface;

mod persistence;

pub use persistence::DEFAULT_FILE_NAME;

/// The ordered collection of shapes on the canvas.
///
/// Creation order is paint order: later shapes are drawn on top. The store
/// guarantees that at most one shape is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    /// The most recently created shape
    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Append a shape on top of the others
    pub fn add(&mut self, shape: Shape) {
        debug!("Adding {} {}", shape.kind().tag(), shape.id());
        let selected = shape.is_selected().then(|| shape.id());
        self.shapes.push(shape);
        if selected.is_some() {
            self.set_selected(selected);
        }
    }

    /// Swap in a new version of a shape, matched by id.
    ///
    /// Returns false when no shape has that id.
    pub fn replace(&mut self, shape: Shape) -> bool {
        let id = shape.id();
        let selected = shape.is_selected();
        let Some(slot) = self.shapes.iter_mut().find(|existing| existing.id() == id) else {
            return false;
        };
        *slot = shape;
        if selected {
            self.set_selected(Some(id));
        }
        true
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        let removed = self.shapes.remove(index);
        debug!("Removed {} {}", removed.kind().tag(), removed.id());
        Some(removed)
    }

    pub fn clear(&mut self) {
        debug!("Clearing scene of {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    /// First shape, in creation order, that the point hits
    pub fn shape_at(&self, point: Pos2) -> Option<(&Shape, Position)> {
        self.shapes
            .iter()
            .find_map(|shape| shape.check_intersection(point).map(|pos| (shape, pos)))
    }

    pub fn selected(&self) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.is_selected())
    }

    /// Select one shape and deselect every other; `None` clears the selection
    pub fn set_selected(&mut self, id: Option<ShapeId>) {
        for shape in &mut self.shapes {
            let selected = Some(shape.id()) == id;
            if shape.is_selected() != selected {
                *shape = shape.with_selected(selected);
            }
        }
    }

    /// Redraw the whole scene from scratch
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for shape in &self.shapes {
            shape.render(surface);
        }
    }
}

impl From<Vec<Shape>> for Scene {
    fn from(shapes: Vec<Shape>) -> Self {
        let mut scene = Scene::new();
        for shape in shapes {
            scene.add(shape);
        }
        scene
    }
}
