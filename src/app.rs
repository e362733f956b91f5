use std::path::Path;

use log::{error, info};

use crate::config::AppSettings;
use crate::error::SceneResult;
use crate::file_transfer::{self, FileInbox, FileOutcome};
use crate::input::{InputEvent, InputHandler};
use crate::interaction::Controller;
use crate::panels::{central_panel, style_panel, tools_panel};
use crate::scene::Scene;
use crate::style::Styles;

pub struct WhiteboardApp {
    pub(crate) settings: AppSettings,
    pub(crate) scene: Scene,
    pub(crate) controller: Controller,
    pub(crate) input: InputHandler,
    // Results of file dialogs and drops that finish outside of `update`
    pub(crate) files: FileInbox,
    // Last error reported to the user, shown until dismissed
    pub(crate) last_error: Option<String>,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load(cc.storage);
        cc.egui_ctx.set_visuals(settings.theme.visuals());
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            controller: Controller::new(settings.default_styles),
            settings,
            scene: Scene::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            files: FileInbox::new(),
            last_error: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Feed input to the controller. Failed gestures are logged and reported,
    /// the remaining events still run.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            if let Err(err) = self.controller.handle_event(event, &mut self.scene) {
                error!("{event:?} failed: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Restyle the selection and remember the styles for new shapes
    pub fn set_styles(&mut self, styles: Styles) {
        self.controller.set_styles(styles, &mut self.scene);
        self.settings.default_styles = styles;
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = self.settings.theme.toggled();
        ctx.set_visuals(self.settings.theme.visuals());
        info!("Theme set to {:?}", self.settings.theme);
    }

    pub fn delete_selected(&mut self) {
        self.controller.delete_selected(&mut self.scene);
    }

    pub fn clear_scene(&mut self) {
        self.scene.clear();
        self.reset_controller();
    }

    pub fn export_scene(&self, path: &Path) -> SceneResult<()> {
        self.scene.save_to_path(path)
    }

    /// Replace the scene with the one stored at `path`. On error the current
    /// scene is left untouched.
    pub fn import_scene(&mut self, path: &Path) -> SceneResult<()> {
        self.scene = Scene::load_from_path(path)?;
        self.reset_controller();
        Ok(())
    }

    /// Replace the scene with one parsed from exported JSON
    pub fn import_json(&mut self, json: &str) -> SceneResult<()> {
        self.scene = Scene::from_json(json)?;
        self.reset_controller();
        Ok(())
    }

    /// Apply every file result posted since the last frame
    pub fn apply_file_outcomes(&mut self) {
        for outcome in self.files.drain() {
            match outcome {
                FileOutcome::Imported { name, json } => {
                    let result = self.import_json(&json);
                    if result.is_ok() {
                        info!("Imported {} shapes from {}", self.scene.len(), name);
                    }
                    self.report("Import", result);
                }
                FileOutcome::Exported { name } => info!("Exported scene as {name}"),
                FileOutcome::Failed { context, message } => {
                    error!("{context} failed: {message}");
                    self.last_error = Some(format!("{context} failed: {message}"));
                }
            }
        }
    }

    pub(crate) fn report(&mut self, context: &str, result: SceneResult<()>) {
        if let Err(err) = result {
            error!("{context} failed: {err}");
            self.last_error = Some(format!("{context} failed: {err}"));
        }
    }

    // Any gesture in flight targets shapes that no longer exist
    fn reset_controller(&mut self) {
        let styles = *self.controller.styles();
        self.controller = Controller::new(styles);
    }

    fn error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.last_error.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("Close").clicked() {
                    self.last_error = None;
                }
            });
    }
}

impl eframe::App for WhiteboardApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|input| input.raw.dropped_files.clone());
        for outcome in file_transfer::read_dropped(&dropped) {
            self.files.post(outcome);
        }
        self.apply_file_outcomes();

        tools_panel(self, ctx);
        style_panel(self, ctx);
        central_panel(self, ctx);
        self.error_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use egui::Pos2;

    use super::*;
    use crate::error::SceneError;

    #[test]
    fn test_gesture_errors_are_reported() {
        let mut app = WhiteboardApp::default();
        app.handle_events([
            InputEvent::KeyPressed('t'),
            InputEvent::PointerDown(Pos2::new(5.0, 5.0)),
        ]);
        assert!(app.last_error.is_some());
        assert!(app.scene().is_empty());
    }

    #[test]
    fn test_set_styles_updates_defaults() {
        let mut app = WhiteboardApp::default();
        let styles = Styles {
            width: 7.0,
            ..Styles::default()
        };
        app.set_styles(styles);
        assert_eq!(app.settings().default_styles, styles);
        assert_eq!(*app.controller().styles(), styles);
    }

    #[test]
    fn test_posted_import_replaces_scene() {
        let mut app = WhiteboardApp::default();
        let json = r##"[{"type": "circ", "start": {"x": 0, "y": 0}, "end": {"x": 40, "y": 20},
            "styles": {"strokeStyle": "#000", "fillStyle": "#0000", "width": 2, "lineCap": "round"}}]"##;

        app.files.clone().post(FileOutcome::Imported {
            name: "canvas.json".to_owned(),
            json: json.to_owned(),
        });
        app.apply_file_outcomes();

        assert_eq!(app.scene().len(), 1);
        assert_eq!(app.scene().shapes()[0].end(), Pos2::new(40.0, 20.0));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_posted_failures_are_reported() {
        let mut app = WhiteboardApp::default();
        app.files.post(FileOutcome::Imported {
            name: "broken.json".to_owned(),
            json: "[{".to_owned(),
        });
        app.files.post(FileOutcome::Failed {
            context: "Export",
            message: "denied".to_owned(),
        });
        app.apply_file_outcomes();

        assert_eq!(app.last_error.as_deref(), Some("Export failed: denied"));
        assert!(app.scene().is_empty());
        assert!(app.files.drain().is_empty());
    }

    #[test]
    fn test_failed_import_keeps_scene() {
        let mut app = WhiteboardApp::default();
        app.handle_events([
            InputEvent::KeyPressed('r'),
            InputEvent::PointerDown(Pos2::new(0.0, 0.0)),
            InputEvent::PointerMove(Pos2::new(20.0, 20.0)),
            InputEvent::PointerUp(Pos2::new(20.0, 20.0)),
        ]);
        let missing = std::env::temp_dir().join("eframe_whiteboard_missing_scene.json");
        let _ = std::fs::remove_file(&missing);

        let result = app.import_scene(&missing);
        assert!(matches!(result, Err(SceneError::Io(_))));
        assert_eq!(app.scene().len(), 1);
    }
}
