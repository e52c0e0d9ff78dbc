//! Physics module for collision detection
//!
//! Hit-box collision between the runner's avatar and the obstacle in view.
//! There is no collision response: a hit simply ends the run.

pub mod collision;
pub mod collision_system;

#[cfg(test)]
mod tests;

pub use collision::{adjust_box, boxes_overlap, Collider, SPRITE_BORDER};
pub use collision_system::{check_for_collision, CollisionPair, CollisionSystem};
