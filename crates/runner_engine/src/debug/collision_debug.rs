//! Collision-specific debug visualization
//!
//! Outlines the hit-boxes the collision system tests so they can be
//! compared against the sprites on screen.

use serde::{Deserialize, Serialize};

use crate::debug::draw::DrawSurface;
use crate::foundation::math::{Rect, Vec4};

/// Color scheme for collision visualization
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionDebugColors {
    /// Color for the avatar's boxes
    pub avatar: Vec4,

    /// Color for the obstacle's boxes
    pub obstacle: Vec4,
}

impl Default for CollisionDebugColors {
    fn default() -> Self {
        Self {
            avatar: Vec4::new(1.0, 0.0, 0.0, 1.0),   // Red
            obstacle: Vec4::new(0.0, 1.0, 0.0, 1.0), // Green
        }
    }
}

/// Outline one avatar box and one obstacle box
///
/// The surface's drawing state is saved first and restored afterwards, so
/// the stroke colour never leaks into later draws.
pub fn draw_collision_boxes(
    surface: &mut dyn DrawSurface,
    avatar_box: &Rect,
    obstacle_box: &Rect,
    colors: &CollisionDebugColors,
) {
    surface.save();

    surface.set_stroke_color(colors.avatar);
    surface.stroke_rect(avatar_box);

    surface.set_stroke_color(colors.obstacle);
    surface.stroke_rect(obstacle_box);

    surface.restore();
}
