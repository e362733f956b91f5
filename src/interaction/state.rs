use crate::geometry::Position;
use crate::id_generator::ShapeId;

/// What the pointer is doing between a press and its release.
///
/// ```text
///              press with shape tool
///        ┌──────────────────────────────► Drawing ──┐
///        │     press on a shape body                │
///  Idle ─┼──────────────────────────────► Moving  ──┼─► release ─► Idle
///        │     press on a handle/endpoint           │
///        └──────────────────────────────► Resizing ─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing {
        id: ShapeId,
    },
    Moving {
        id: ShapeId,
    },
    Resizing {
        id: ShapeId,
        position: Position,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Drawing { .. } => "drawing",
            GestureState::Moving { .. } => "moving",
            GestureState::Resizing { .. } => "resizing",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}
