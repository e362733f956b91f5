use thiserror::Error;

use crate::id_generator::ShapeId;

/// Errors raised by tools in the registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The tool exists in the catalogue but has no behavior yet
    #[error("Tool '{0}' is not implemented")]
    Unimplemented(&'static str),
}

/// Errors that can occur while the controller runs a gesture
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// A util tool failed when invoked
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The shape targeted by the active gesture is no longer in the scene
    #[error("Shape {0} is not in the scene")]
    MissingShape(ShapeId),

    /// Attempted to transition between incompatible gesture states
    #[error("Cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },
}

/// Errors that can occur while exporting or importing a scene
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to access scene file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scene persistence operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur when reading a CSS hex colour
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Colour must start with '#': {0}")]
    MissingHash(String),

    #[error("Colour must have 3, 4, 6 or 8 hex digits: {0}")]
    InvalidLength(String),

    #[error("Invalid hex digit in colour: {0}")]
    InvalidDigit(String),
}
