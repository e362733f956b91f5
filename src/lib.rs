#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod file_transfer;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod scene;
pub mod shape;
pub mod style;
pub mod surface;
pub mod tools;

pub use app::WhiteboardApp;
pub use config::{AppSettings, Theme};
pub use error::{ColorParseError, GestureError, SceneError, SceneResult, ToolError};
pub use geometry::{Handle, Position};
pub use id_generator::ShapeId;
pub use input::{InputEvent, InputHandler};
pub use interaction::{Controller, GestureState};
pub use scene::Scene;
pub use shape::{Shape, ShapeKind};
pub use style::{LineCap, Styles};
pub use surface::{DrawOp, PainterSurface, RecordingSurface, Surface};
pub use tools::{ToolDescriptor, ToolType, UtilTool};
