//! # Runner Configuration
//!
//! All tunables for the runner in one serializable tree:
//!
//! - **Engine Config**: logging and simulation rate
//! - **Collision Config**: debug overlay toggle and colours
//! - **Horizon Config**: ground strip dimensions and texture selection
//!
//! Every section has sensible defaults and `#[serde(default)]`, so a config
//! file only needs the values it changes.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};
use crate::debug::collision_debug::CollisionDebugColors;

/// # Engine Configuration
///
/// Logging and frame-rate settings shared by every subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, used when `RUST_LOG` is not set
    pub log_level: String,
    /// Simulation frames per second
    pub fps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fps: 60,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fps == 0 {
            return Err("fps must be at least 1".to_string());
        }
        Ok(())
    }
}

/// # Collision Configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Outline every tested hit-box
    pub debug_draw: bool,
    /// Overlay colours
    pub colors: CollisionDebugColors,
}

/// # Horizon Configuration
///
/// Ground strip geometry in screen pixels. On HiDPI sprite sheets the source
/// rectangles are twice as large as the on-screen ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    /// Width of one ground segment
    pub width: f32,
    /// Height of the ground strip
    pub height: f32,
    /// Vertical screen position of the strip
    pub y_pos: f32,
    /// A wrapped segment turns bumpy when a uniform roll exceeds this
    pub bump_threshold: f32,
    /// Sprite sheet is double resolution
    pub hidpi: bool,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 12.0,
            y_pos: 127.0,
            bump_threshold: 0.5,
            hidpi: false,
        }
    }
}

impl HorizonConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(format!(
                "Horizon size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if !(0.0..=1.0).contains(&self.bump_threshold) {
            return Err(format!(
                "Bump threshold must be within [0, 1], got {}",
                self.bump_threshold
            ));
        }
        Ok(())
    }
}

/// # Runner Configuration
///
/// Root of the configuration tree, loadable from TOML or RON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Engine settings
    pub engine: EngineConfig,
    /// Collision settings
    pub collision: CollisionConfig,
    /// Horizon settings
    pub horizon: HorizonConfig,
}

impl Config for RunnerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate().map_err(ConfigError::Invalid)?;
        self.horizon.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}
