use egui::{Context, Event, Key, PointerButton, Pos2, Rect};

/// Input the interaction controller understands.
///
/// Pointer positions are canvas-local: (0, 0) is the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown(Pos2),
    /// Pointer moved over the canvas, pressed or not
    PointerMove(Pos2),
    /// Primary button released
    PointerUp(Pos2),
    /// Pointer left the canvas; ends any gesture like a release would
    PointerLeave,
    /// A character was typed; may select a tool by hotkey
    KeyPressed(char),
    /// The constrained-draw modifier (shift) was pressed or released
    ShiftChanged(bool),
    /// Delete the selected shape
    DeleteSelected,
}

/// Turns raw egui input over the canvas into [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_inside: bool,
    // A press started on the canvas and has not been released yet
    pressed_on_canvas: bool,
    shift_held: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pointer_inside: false,
            pressed_on_canvas: false,
            shift_held: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let keyboard_free = !ctx.wants_keyboard_input();
        let mut events = Vec::new();

        ctx.input(|input| {
            if input.modifiers.shift != self.shift_held {
                self.shift_held = input.modifiers.shift;
                events.push(InputEvent::ShiftChanged(self.shift_held));
            }

            for event in &input.events {
                match event {
                    Event::PointerMoved(pos) => self.pointer_moved(*pos, &mut events),
                    Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        if *pressed && self.canvas_rect.contains(*pos) {
                            self.pressed_on_canvas = true;
                            events.push(InputEvent::PointerDown(self.to_local(*pos)));
                        } else if !*pressed && self.pressed_on_canvas {
                            self.pressed_on_canvas = false;
                            events.push(InputEvent::PointerUp(self.to_local(*pos)));
                        }
                    }
                    Event::PointerGone => {
                        self.pointer_inside = false;
                        self.leave(&mut events);
                    }
                    Event::Text(text) if keyboard_free => {
                        events.extend(text.chars().map(InputEvent::KeyPressed));
                    }
                    Event::Key {
                        key: Key::Delete | Key::Backspace,
                        pressed: true,
                        ..
                    } if keyboard_free => events.push(InputEvent::DeleteSelected),
                    _ => {}
                }
            }
        });

        events
    }

    fn pointer_moved(&mut self, pos: Pos2, events: &mut Vec<InputEvent>) {
        let inside = self.canvas_rect.contains(pos);
        if inside {
            events.push(InputEvent::PointerMove(self.to_local(pos)));
        } else if self.pointer_inside {
            self.leave(events);
        }
        self.pointer_inside = inside;
    }

    // Leaving only matters while a press is held: it ends the gesture
    fn leave(&mut self, events: &mut Vec<InputEvent>) {
        if self.pressed_on_canvas {
            self.pressed_on_canvas = false;
            events.push(InputEvent::PointerLeave);
        }
    }
}
