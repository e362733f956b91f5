use serde::{Deserialize, Serialize};

use crate::style::Styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    /// Colour the canvas is cleared to
    pub fn canvas_background(self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::WHITE,
            Theme::Dark => egui::Color32::from_gray(24),
        }
    }
}

/// User preferences that survive a restart.
///
/// We derive Deserialize/Serialize so eframe can persist them on shutdown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    pub theme: Theme,
    /// Styles new shapes are drawn with
    pub default_styles: Styles,
}

impl AppSettings {
    /// Settings stored by a previous run, or the defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
