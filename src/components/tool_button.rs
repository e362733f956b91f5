use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, vec2};

use crate::tools::ToolDescriptor;

const BUTTON_SIZE: f32 = 32.0;
const ROUNDING: f32 = 4.0;

/// Square toolbar button showing a tool's icon, highlighted when active
pub struct ToolButton {
    pub tool: &'static ToolDescriptor,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: &'static ToolDescriptor, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(vec2(BUTTON_SIZE, BUTTON_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else {
                visuals.bg_fill
            };
            ui.painter().rect_filled(rect, ROUNDING, bg_color);

            let text_color = if self.selected {
                Color32::BLACK
            } else {
                visuals.text_color()
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.tool.icon,
                FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    ROUNDING,
                    Stroke::new(2.0, Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.tool.hover_text())
    }
}
