use crate::WhiteboardApp;
use crate::components::ToolButton;
use crate::tools::{self, ToolCategory};

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(56.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.controller.active_tool();
            let mut previous = None;
            for tool in tools::tools() {
                // Group the buttons by category
                if previous.is_some_and(|category| category != tool.category()) {
                    ui.separator();
                }
                previous = Some(tool.category());

                if ToolButton::new(tool, tool == active).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool.title);
                    app.controller.set_active_tool(tool);
                }
            }

            if previous == Some(ToolCategory::Util) {
                ui.separator();
            }
            file_buttons(app, ui);
        });
}

#[cfg(not(target_arch = "wasm32"))]
fn file_buttons(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    use crate::scene::DEFAULT_FILE_NAME;

    if ui.button("Export").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()
        {
            let result = app.export_scene(&path);
            app.report("Export", result);
        }
    }

    if ui.button("Import").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let result = app.import_scene(&path);
            app.report("Import", result);
        }
    }
}

// Browser dialogs are async; their results come back through the app's inbox
#[cfg(target_arch = "wasm32")]
fn file_buttons(app: &mut WhiteboardApp, ui: &mut egui::Ui) {
    use crate::file_transfer;
    use crate::scene::DEFAULT_FILE_NAME;

    if ui.button("Export").clicked() {
        match app.scene.to_json() {
            Ok(json) => file_transfer::export_async(
                json,
                DEFAULT_FILE_NAME,
                app.files.clone(),
                ui.ctx().clone(),
            ),
            Err(err) => app.report("Export", Err(err)),
        }
    }

    if ui.button("Import").clicked() {
        file_transfer::import_async(app.files.clone(), ui.ctx().clone());
    }
}
