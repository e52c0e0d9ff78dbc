//! Hit-box geometry attached to game entities
//!
//! Sub-boxes are stored in local space (relative to the entity's outer box)
//! and moved into world space on demand, once per collision test.

use crate::foundation::math::{Rect, Vec2};

/// Width of the transparent border baked into every sprite, in pixels
///
/// Outer boxes are inset by this much on each side so they hug the visible
/// silhouette instead of the full sprite canvas.
pub const SPRITE_BORDER: f32 = 1.0;

/// Anything the collision system can test
///
/// Implemented by the avatar and by obstacles. The collision system only
/// reads through this trait and never keeps references between calls.
pub trait Collider {
    /// World-space top-left corner of the sprite
    fn position(&self) -> Vec2;

    /// Full sprite extent, including every repeated segment
    fn extent(&self) -> Vec2;

    /// Hit geometry in local space, in test order
    fn collision_boxes(&self) -> &[Rect];

    /// World-space outer box, inset by [`SPRITE_BORDER`]
    fn outer_box(&self) -> Rect {
        Rect::from_position_size(self.position(), self.extent()).inset(SPRITE_BORDER)
    }
}

/// Move a local sub-box into world space
///
/// The result sits at `owner.position + local.position` and keeps the size
/// of `local`. `owner` is normally the entity's outer box, so local offsets
/// are measured from the inset box rather than the raw sprite origin.
#[inline]
pub fn adjust_box(local: &Rect, owner: &Rect) -> Rect {
    local.translated(owner.position())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Crate {
        position: Vec2,
        boxes: Vec<Rect>,
    }

    impl Collider for Crate {
        fn position(&self) -> Vec2 {
            self.position
        }

        fn extent(&self) -> Vec2 {
            Vec2::new(20.0, 20.0)
        }

        fn collision_boxes(&self) -> &[Rect] {
            &self.boxes
        }
    }

    #[test]
    fn test_adjust_box_offsets_by_owner() {
        let local = Rect::new(3.0, 4.0, 5.0, 6.0);
        let owner = Rect::new(100.0, 50.0, 40.0, 40.0);
        assert_eq!(adjust_box(&local, &owner), Rect::new(103.0, 54.0, 5.0, 6.0));
    }

    #[test]
    fn test_adjust_box_leaves_inputs_untouched() {
        let local = Rect::new(3.0, 4.0, 5.0, 6.0);
        let owner = Rect::new(100.0, 50.0, 40.0, 40.0);
        let _ = adjust_box(&local, &owner);
        assert_eq!(local, Rect::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(owner, Rect::new(100.0, 50.0, 40.0, 40.0));
    }

    #[test]
    fn test_default_outer_box_is_border_inset() {
        let collider = Crate { position: Vec2::zeros(), boxes: Vec::new() };
        assert_eq!(collider.outer_box(), Rect::new(1.0, 1.0, 18.0, 18.0));
    }
}
