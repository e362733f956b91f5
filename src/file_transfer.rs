//! Moving scenes in and out of the app without blocking the UI thread.
//!
//! Browser file dialogs and dropped files finish outside of `update`, so their
//! results are posted to a [`FileInbox`] that the app drains every frame.

use std::cell::RefCell;
use std::rc::Rc;

/// The result of one export or import
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// A file was read; its text still has to be parsed as a scene
    Imported { name: String, json: String },
    Exported { name: String },
    Failed { context: &'static str, message: String },
}

/// Shared slot for file results, cloned into async tasks
#[derive(Debug, Clone, Default)]
pub struct FileInbox(Rc<RefCell<Vec<FileOutcome>>>);

impl FileInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, outcome: FileOutcome) {
        self.0.borrow_mut().push(outcome);
    }

    /// Everything posted since the last drain, oldest first
    pub fn drain(&self) -> Vec<FileOutcome> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Read the text of files dropped on the window
pub fn read_dropped(files: &[egui::DroppedFile]) -> Vec<FileOutcome> {
    files.iter().map(read_dropped_file).collect()
}

fn read_dropped_file(file: &egui::DroppedFile) -> FileOutcome {
    let name = dropped_name(file);
    if let Some(bytes) = &file.bytes {
        log::info!("Reading dropped file {} from memory ({} bytes)", name, bytes.len());
        return text_outcome(name, bytes.to_vec());
    }

    // Native backends give a path instead of bytes
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(path) = &file.path {
            log::info!("Reading dropped file from {}", path.display());
            return match std::fs::read(path) {
                Ok(bytes) => text_outcome(name, bytes),
                Err(err) => FileOutcome::Failed {
                    context: "Import",
                    message: format!("{}: {err}", path.display()),
                },
            };
        }
    }

    log::warn!("Dropped file has no accessible data: {}", name);
    FileOutcome::Failed {
        context: "Import",
        message: format!("{name}: no data"),
    }
}

fn dropped_name(file: &egui::DroppedFile) -> String {
    if !file.name.is_empty() {
        return file.name.clone();
    }
    file.path
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dropped file".to_owned())
}

fn text_outcome(name: String, bytes: Vec<u8>) -> FileOutcome {
    match String::from_utf8(bytes) {
        Ok(json) => FileOutcome::Imported { name, json },
        Err(err) => FileOutcome::Failed {
            context: "Import",
            message: format!("{name} is not UTF-8 text: {err}"),
        },
    }
}

/// Offer `json` as a download named `file_name`; the outcome lands in `inbox`
#[cfg(target_arch = "wasm32")]
pub fn export_async(json: String, file_name: &str, inbox: FileInbox, ctx: egui::Context) {
    let dialog = rfd::AsyncFileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(file_name);
    wasm_bindgen_futures::spawn_local(async move {
        let Some(handle) = dialog.save_file().await else {
            log::debug!("Export cancelled");
            return;
        };
        let name = handle.file_name();
        let outcome = match handle.write(json.as_bytes()).await {
            Ok(()) => FileOutcome::Exported { name },
            Err(err) => FileOutcome::Failed {
                context: "Export",
                message: err.to_string(),
            },
        };
        inbox.post(outcome);
        ctx.request_repaint();
    });
}

/// Let the user pick a scene file and read it into `inbox`
#[cfg(target_arch = "wasm32")]
pub fn import_async(inbox: FileInbox, ctx: egui::Context) {
    let dialog = rfd::AsyncFileDialog::new().add_filter("JSON", &["json"]);
    wasm_bindgen_futures::spawn_local(async move {
        let Some(handle) = dialog.pick_file().await else {
            log::debug!("Import cancelled");
            return;
        };
        let bytes = handle.read().await;
        inbox.post(text_outcome(handle.file_name(), bytes));
        ctx.request_repaint();
    });
}
