//! # Runner Engine
//!
//! Collision core and scenery for a side-scrolling runner game.
//!
//! ## Features
//!
//! - **Hit-Box Collision**: Two-level AABB test between the avatar and an obstacle
//! - **Debug Overlay**: Optional outlines of every box the collision test looks at
//! - **Scrolling Horizon**: Looping two-segment ground strip
//! - **Configuration**: TOML/RON configuration with validation
//!
//! ## Quick Start
//!
//! ```rust
//! use runner_engine::prelude::*;
//!
//! let avatar = Avatar::new(Vec2::new(50.0, 93.0));
//! let cactus = Obstacle::spawn(ObstacleKind::SmallCactus, 600.0, 2);
//!
//! // Far away: the outer boxes do not even overlap.
//! assert!(check_for_collision(&avatar, &cactus, None).is_none());
//!
//! let mut canvas = DebugCanvas::new();
//! let touching = Obstacle::spawn(ObstacleKind::SmallCactus, 70.0, 1);
//! let pair = check_for_collision(&avatar, &touching, Some(&mut canvas));
//! assert!(pair.is_some());
//! assert!(canvas.shape_count() > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod config;
pub mod debug;
pub mod entities;
pub mod foundation;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, RunnerConfig},
        debug::{CollisionDebugColors, DebugCanvas, DrawSurface},
        entities::{Avatar, Obstacle, ObstacleKind},
        foundation::math::{Rect, Vec2, Vec4},
        physics::{check_for_collision, Collider, CollisionPair, CollisionSystem},
        scene::HorizonLine,
    };
}
