//! Hit-box collision geometry
//!
//! # Architecture
//!
//! - **Local Space Storage**: Sub-boxes are stored relative to their entity
//! - **On-Demand Transformation**: Boxes are moved to world space only during tests
//! - **Value Semantics**: Every adjusted or inset box is a fresh [`Rect`]
//!
//! # Module Organization
//!
//! - [`primitives`] - AABB overlap test
//! - [`shape`] - Entity hit geometry and local-to-world adjustment
//!
//! [`Rect`]: crate::foundation::math::Rect

pub mod primitives;
pub mod shape;

pub use primitives::boxes_overlap;
pub use shape::{adjust_box, Collider, SPRITE_BORDER};
