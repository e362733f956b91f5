//! The pointer gesture state machine.
//!
//! A [`Controller`] owns the active tool and the gesture in progress, and
//! turns [`InputEvent`]s into scene mutations. It never draws; the caller
//! re-renders the scene after handling events.

use egui::{CursorIcon, Pos2};
use log::{debug, info, warn};

use crate::error::GestureError;
use crate::id_generator::ShapeId;
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::style::Styles;
use crate::tools::{self, ToolDescriptor, ToolType, UtilTool};

mod cursor;
mod resize;
mod state;

pub use cursor::cursor_for_position;
pub use resize::resize_anchors;
pub use state::GestureState;

#[derive(Debug, Clone)]
pub struct Controller {
    active_tool: &'static ToolDescriptor,
    state: GestureState,
    styles: Styles,
    special_render: bool,
    cursor: CursorIcon,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Styles::default())
    }
}

impl Controller {
    /// A controller holding the selection tool, drawing new shapes with `styles`
    pub fn new(styles: Styles) -> Self {
        Self {
            active_tool: tools::selection_tool(),
            state: GestureState::Idle,
            styles,
            special_render: false,
            cursor: CursorIcon::Default,
        }
    }

    pub fn active_tool(&self) -> &'static ToolDescriptor {
        self.active_tool
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Styles given to newly drawn shapes
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn special_render(&self) -> bool {
        self.special_render
    }

    /// Cursor for the last pointer position
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn set_active_tool(&mut self, tool: &'static ToolDescriptor) {
        if tool != self.active_tool {
            info!("Tool changed: {} -> {}", self.active_tool.title, tool.title);
        }
        self.active_tool = tool;
        if matches!(tool.tool_type, ToolType::Shape(_)) {
            self.cursor = CursorIcon::Crosshair;
        }
    }

    /// Replace the styles for new shapes and restyle the selected shape, if any
    pub fn set_styles(&mut self, styles: Styles, scene: &mut Scene) {
        self.styles = styles;
        if let Some(selected) = scene.selected() {
            let restyled = selected.with_styles(styles);
            scene.replace(restyled);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent, scene: &mut Scene) -> Result<(), GestureError> {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point, scene),
            InputEvent::PointerMove(point) => self.pointer_move(point, scene),
            InputEvent::PointerUp(_) | InputEvent::PointerLeave => self.pointer_up(scene),
            InputEvent::KeyPressed(key) => {
                self.key_pressed(key);
                Ok(())
            }
            InputEvent::ShiftChanged(held) => {
                self.set_special_render(held, scene);
                Ok(())
            }
            InputEvent::DeleteSelected => {
                self.delete_selected(scene);
                Ok(())
            }
        }
    }

    /// Switch to the tool bound to `key`; unbound keys are ignored
    pub fn key_pressed(&mut self, key: char) -> bool {
        match tools::tool_for_hotkey(key) {
            Some(tool) => {
                self.set_active_tool(tool);
                true
            }
            None => false,
        }
    }

    /// Start a gesture at `point`
    pub fn pointer_down(&mut self, point: Pos2, scene: &mut Scene) -> Result<(), GestureError> {
        if !self.state.is_idle() {
            warn!("Pointer pressed while {}; ending that gesture first", self.state.name());
            self.pointer_up(scene)?;
        }

        if let Some(shape) = self.active_tool.generate_shape(point, self.styles) {
            let shape = shape.with_special_render(self.special_render);
            debug!("Drawing {} at {:?}", shape.kind().tag(), point);
            self.state = GestureState::Drawing { id: shape.id() };
            scene.add(shape);
            return Ok(());
        }

        match self.active_tool.tool_type {
            // Handled by the tool's generator above
            ToolType::Shape(_) => {}
            ToolType::Selection => self.select_at(point, scene),
            ToolType::Util(util) => {
                util.action()?;
                if util == UtilTool::Eraser {
                    Self::erase_at(point, scene);
                }
            }
        }
        Ok(())
    }

    /// Continue the gesture in progress, if any
    pub fn pointer_move(&mut self, point: Pos2, scene: &mut Scene) -> Result<(), GestureError> {
        self.cursor = self.cursor_at(point, scene);

        match self.state {
            GestureState::Idle => {}
            GestureState::Drawing { id } => {
                let shape = self.target(scene, id)?;
                scene.replace(shape.transformed(shape.start(), point));
            }
            GestureState::Moving { id } => {
                let shape = self.target(scene, id)?;
                scene.replace(shape.moved(point));
            }
            GestureState::Resizing { id, position } => {
                let shape = self.target(scene, id)?;
                let (start, end) = match resize_anchors(position, shape.start(), shape.end(), point) {
                    Ok(anchors) => anchors,
                    Err(err) => {
                        self.state = GestureState::Idle;
                        return Err(err);
                    }
                };
                scene.replace(shape.transformed(start, end));
            }
        }
        Ok(())
    }

    /// Finish the gesture in progress and fall back to the selection tool
    pub fn pointer_up(&mut self, scene: &mut Scene) -> Result<(), GestureError> {
        let finished = std::mem::take(&mut self.state);
        self.set_active_tool(tools::selection_tool());

        match finished {
            GestureState::Idle | GestureState::Moving { .. } => Ok(()),
            GestureState::Drawing { id } => {
                let shape = scene.get(id).ok_or(GestureError::MissingShape(id))?;
                let done = shape
                    .normalized()
                    .with_special_render(false)
                    .with_selected(true);
                debug!("Finished drawing {} {:?} -> {:?}", id, done.start(), done.end());
                scene.replace(done);
                Ok(())
            }
            GestureState::Resizing { id, .. } => {
                let shape = scene.get(id).ok_or(GestureError::MissingShape(id))?;
                let done = shape.normalized().with_special_render(false);
                scene.replace(done);
                Ok(())
            }
        }
    }

    /// Toggle the constrained-draw modifier, updating the live shape
    pub fn set_special_render(&mut self, held: bool, scene: &mut Scene) {
        self.special_render = held;
        if let GestureState::Drawing { id } | GestureState::Resizing { id, .. } = self.state {
            if let Some(shape) = scene.get(id) {
                let updated = shape.with_special_render(held);
                scene.replace(updated);
            }
        }
    }

    /// Remove the selected shape when no gesture is running
    pub fn delete_selected(&mut self, scene: &mut Scene) -> Option<Shape> {
        if !self.state.is_idle() {
            return None;
        }
        let id = scene.selected()?.id();
        scene.remove(id)
    }

    fn select_at(&mut self, point: Pos2, scene: &mut Scene) {
        let Some((shape, position)) = scene
            .shape_at(point)
            .map(|(shape, position)| (shape.clone(), position))
        else {
            if scene.selected().is_some() {
                debug!("Clearing selection");
                scene.set_selected(None);
            }
            return;
        };

        let id = shape.id();
        if position.is_inside() {
            scene.replace(shape.with_offset(point).with_selected(true));
            self.state = GestureState::Moving { id };
        } else {
            // Handle mapping expects canonical corners
            let grabbed = shape
                .normalized()
                .with_offset(point)
                .with_selected(true)
                .with_special_render(self.special_render);
            scene.replace(grabbed);
            self.state = GestureState::Resizing { id, position };
        }
        debug!("Grabbed {} at '{}'", id, position.as_str());
    }

    fn erase_at(point: Pos2, scene: &mut Scene) {
        if let Some(id) = scene.shape_at(point).map(|(shape, _)| shape.id()) {
            scene.remove(id);
        }
    }

    fn cursor_at(&self, point: Pos2, scene: &Scene) -> CursorIcon {
        match self.active_tool.tool_type {
            ToolType::Shape(_) => CursorIcon::Crosshair,
            ToolType::Util(_) => CursorIcon::Default,
            ToolType::Selection => scene
                .shape_at(point)
                .map(|(shape, position)| cursor_for_position(shape, position))
                .unwrap_or(CursorIcon::Default),
        }
    }

    // The gesture's shape, or an error that also abandons the gesture
    fn target(&mut self, scene: &Scene, id: ShapeId) -> Result<Shape, GestureError> {
        match scene.get(id) {
            Some(shape) => Ok(shape.clone()),
            None => {
                self.state = GestureState::Idle;
                Err(GestureError::MissingShape(id))
            }
        }
    }
}
