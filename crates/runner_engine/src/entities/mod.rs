//! Game entities that take part in collision tests

pub mod avatar;
pub mod obstacle;

pub use avatar::{Avatar, AVATAR_COLLISION_BOXES, AVATAR_HEIGHT, AVATAR_WIDTH};
pub use obstacle::{Obstacle, ObstacleKind};
