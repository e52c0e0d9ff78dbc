//! The player's avatar

use crate::foundation::math::{Rect, Vec2};
use crate::physics::collision::Collider;

/// Sprite width in pixels
pub const AVATAR_WIDTH: f32 = 44.0;

/// Sprite height in pixels
pub const AVATAR_HEIGHT: f32 = 47.0;

/// Running hit geometry, shared by every avatar
///
/// Offsets are relative to the avatar's outer box: head, arms, feet and
/// the torso bands in between.
pub static AVATAR_COLLISION_BOXES: [Rect; 6] = [
    Rect::new(22.0, 0.0, 17.0, 16.0),
    Rect::new(1.0, 18.0, 30.0, 9.0),
    Rect::new(10.0, 35.0, 14.0, 8.0),
    Rect::new(1.0, 24.0, 29.0, 5.0),
    Rect::new(5.0, 30.0, 21.0, 4.0),
    Rect::new(9.0, 34.0, 15.0, 4.0),
];

/// The runner the player controls
///
/// Only position is per-instance state; size and hit geometry are
/// constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    /// Top-left corner of the sprite in world space
    pub position: Vec2,
}

impl Avatar {
    /// Create an avatar at the given position
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// Sprite size
    pub fn size() -> Vec2 {
        Vec2::new(AVATAR_WIDTH, AVATAR_HEIGHT)
    }
}

impl Collider for Avatar {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn extent(&self) -> Vec2 {
        Self::size()
    }

    fn collision_boxes(&self) -> &[Rect] {
        &AVATAR_COLLISION_BOXES
    }
}
