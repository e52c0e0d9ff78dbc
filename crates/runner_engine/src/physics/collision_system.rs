//! Avatar-versus-obstacle collision detection
//!
//! Two phases, run fresh every frame:
//! - coarse: one outer box per entity, a single AABB test
//! - fine: every avatar sub-box against every obstacle sub-box, moved into
//!   world space relative to the outer boxes
//!
//! Nothing is cached between calls. The optional draw surface only ever
//! receives copies of the boxes being tested and cannot change the result.

use crate::debug::collision_debug::{draw_collision_boxes, CollisionDebugColors};
use crate::debug::draw::DrawSurface;
use crate::foundation::math::Rect;
use crate::physics::collision::{adjust_box, boxes_overlap, Collider};

/// The two world-space sub-boxes that collided
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPair {
    /// Avatar sub-box in world space
    pub avatar: Rect,
    /// Obstacle sub-box in world space
    pub obstacle: Rect,
}

/// Collision detection with a configurable debug overlay
#[derive(Debug, Clone, Default)]
pub struct CollisionSystem {
    colors: CollisionDebugColors,
}

impl CollisionSystem {
    /// Create a collision system with the default debug colours
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom color scheme
    pub fn with_colors(mut self, colors: CollisionDebugColors) -> Self {
        self.colors = colors;
        self
    }

    /// Debug colours in use
    pub fn colors(&self) -> &CollisionDebugColors {
        &self.colors
    }

    /// Test the avatar against one obstacle
    ///
    /// Returns the first colliding pair, scanning avatar sub-boxes in the
    /// outer loop and obstacle sub-boxes in the inner loop, or `None`.
    /// Sub-box lists are not read at all when the outer boxes are apart.
    /// An entity without sub-boxes never collides, even if its outer box
    /// overlaps.
    ///
    /// When `surface` is given, the outer boxes and every tested sub-box
    /// pair are outlined on it.
    pub fn check<A, O>(
        &self,
        avatar: &A,
        obstacle: &O,
        mut surface: Option<&mut dyn DrawSurface>,
    ) -> Option<CollisionPair>
    where
        A: Collider + ?Sized,
        O: Collider + ?Sized,
    {
        let avatar_box = avatar.outer_box();
        let obstacle_box = obstacle.outer_box();

        if let Some(surface) = surface.as_deref_mut() {
            draw_collision_boxes(surface, &avatar_box, &obstacle_box, &self.colors);
        }

        if !boxes_overlap(&avatar_box, &obstacle_box) {
            log::trace!("Outer boxes apart: {:?} / {:?}", avatar_box, obstacle_box);
            return None;
        }

        let obstacle_boxes = obstacle.collision_boxes();

        for avatar_local in avatar.collision_boxes() {
            let adjusted_avatar = adjust_box(avatar_local, &avatar_box);

            for obstacle_local in obstacle_boxes {
                let adjusted_obstacle = adjust_box(obstacle_local, &obstacle_box);

                if let Some(surface) = surface.as_deref_mut() {
                    draw_collision_boxes(surface, &adjusted_avatar, &adjusted_obstacle, &self.colors);
                }

                if boxes_overlap(&adjusted_avatar, &adjusted_obstacle) {
                    log::debug!(
                        "Collision: avatar {:?} hit obstacle {:?}",
                        adjusted_avatar,
                        adjusted_obstacle
                    );
                    return Some(CollisionPair {
                        avatar: adjusted_avatar,
                        obstacle: adjusted_obstacle,
                    });
                }
            }
        }

        None
    }
}

/// Test the avatar against one obstacle using the default debug colours
///
/// See [`CollisionSystem::check`].
pub fn check_for_collision<A, O>(
    avatar: &A,
    obstacle: &O,
    surface: Option<&mut dyn DrawSurface>,
) -> Option<CollisionPair>
where
    A: Collider + ?Sized,
    O: Collider + ?Sized,
{
    CollisionSystem::new().check(avatar, obstacle, surface)
}
