//! Math utilities and types
//!
//! Provides the 2D math types used by the runner: vectors from `nalgebra`
//! and a plain axis-aligned rectangle value type.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colours)
pub type Vec4 = Vector4<f32>;

/// Axis-aligned rectangle in pixel units
///
/// `x`/`y` is the top-left corner. Depending on context the rectangle lives
/// in world space or in an entity's local space; nothing in the type tracks
/// which. Rectangles are values: every transformation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Extent along x (expected non-negative)
    pub width: f32,
    /// Extent along y (expected non-negative)
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from position and size vectors
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area of the rectangle (zero or negative for degenerate rectangles)
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Same size, moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Shrink by `amount` on every side
    ///
    /// The position moves in by `amount` and each dimension loses
    /// `2 * amount`. No clamping: a rectangle narrower than `2 * amount`
    /// comes out with a negative size and therefore overlaps nothing.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }
}

impl From<[f32; 4]> for Rect {
    fn from([x, y, width, height]: [f32; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}
