use std::fs;
use std::path::Path;

use egui::Pos2;
use log::{debug, info, warn};
use serde::Deserialize;

use super::Scene;
use crate::error::SceneResult;
use crate::shape::{Shape, ShapeKind};
use crate::style::Styles;

/// File name offered when exporting a scene
pub const DEFAULT_FILE_NAME: &str = "canvas.json";

/// The part of an exported shape that import reads back.
///
/// `type` stays a string so records of unknown kinds can be skipped instead
/// of failing the whole file.
#[derive(Debug, Deserialize)]
struct ShapeRecord {
    #[serde(rename = "type")]
    kind: String,
    start: Pos2,
    end: Pos2,
    styles: Styles,
}

impl ShapeRecord {
    fn into_shape(self) -> Option<Shape> {
        let Some(kind) = ShapeKind::from_tag(&self.kind) else {
            warn!("Skipping shape of unknown type '{}'", self.kind);
            return None;
        };
        Some(kind.generate(self.start, self.styles).transformed(self.start, self.end))
    }
}

impl Scene {
    /// Serialize every shape, in paint order, as a JSON array
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(&self.shapes)?)
    }

    /// Rebuild a scene from exported JSON.
    ///
    /// Each record is regenerated at its start point and transformed to its
    /// end point, so shapes get fresh ids and come back unselected.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let records: Vec<ShapeRecord> = serde_json::from_str(json)?;
        let total = records.len();
        let shapes: Vec<Shape> = records
            .into_iter()
            .filter_map(ShapeRecord::into_shape)
            .collect();
        debug!("Imported {} of {} shape records", shapes.len(), total);
        Ok(Scene::from(shapes))
    }

    pub fn save_to_path(&self, path: &Path) -> SceneResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        info!("Saved {} shapes to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> SceneResult<Self> {
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        info!("Loaded {} shapes from {}", scene.len(), path.display());
        Ok(scene)
    }
}
