//! Debug module for visualization and debugging tools

pub mod draw;
pub mod collision_debug;

pub use draw::{DebugCanvas, DebugShape, DrawState, DrawSurface};
pub use collision_debug::{draw_collision_boxes, CollisionDebugColors};
