//! Context-free geometry: drawing primitives and hit-testing helpers.
//!
//! Nothing in here knows about shapes; the shape model composes these.

pub mod hit_testing;
pub mod primitives;

pub use hit_testing::{Handle, Position};
pub use primitives::{
    arrow_head_points, draw_arrow_head, draw_line, draw_rect, get_distance, get_snap_point,
};
