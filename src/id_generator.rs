use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a shape, stable for the shape's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// v4 ids are random, so a fresh id never collides with one handed out before
pub fn generate_id() -> ShapeId {
    ShapeId(Uuid::new_v4())
}
