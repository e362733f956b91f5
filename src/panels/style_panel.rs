use crate::WhiteboardApp;
use crate::style::LineCap;

const WIDTH_RANGE: std::ops::RangeInclusive<f32> = 1.0..=20.0;

pub fn style_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::right("style_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Style");

            let mut styles = *app.controller.styles();
            egui::Grid::new("style_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Stroke");
                    ui.color_edit_button_srgba(&mut styles.stroke_style);
                    ui.end_row();

                    ui.label("Fill");
                    ui.color_edit_button_srgba(&mut styles.fill_style);
                    ui.end_row();

                    ui.label("Width");
                    ui.add(egui::Slider::new(&mut styles.width, WIDTH_RANGE));
                    ui.end_row();

                    ui.label("Line cap");
                    egui::ComboBox::from_id_salt("line_cap")
                        .selected_text(styles.line_cap.label())
                        .show_ui(ui, |ui| {
                            for cap in LineCap::ALL {
                                ui.selectable_value(&mut styles.line_cap, cap, cap.label());
                            }
                        });
                    ui.end_row();
                });

            if styles != *app.controller.styles() {
                app.set_styles(styles);
            }

            ui.separator();

            let has_selection = app.scene.selected().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("Delete selected"))
                .clicked()
            {
                app.delete_selected();
            }
            if ui
                .add_enabled(!app.scene.is_empty(), egui::Button::new("Clear canvas"))
                .clicked()
            {
                app.clear_scene();
            }

            ui.separator();

            let theme_label = match app.settings.theme {
                crate::config::Theme::Light => "🌙 Dark mode",
                crate::config::Theme::Dark => "☀ Light mode",
            };
            if ui.button(theme_label).clicked() {
                app.toggle_theme(ctx);
            }

            ui.separator();
            ui.label(format!("Shapes: {}", app.scene.len()));
            ui.label(format!("State: {}", app.controller.state().name()));
        });
}
