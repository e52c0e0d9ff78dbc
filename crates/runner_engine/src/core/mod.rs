//! # Core Engine Module
//!
//! Shared abstractions the other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration tree for all runner subsystems

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    RunnerConfig,
    EngineConfig,
    CollisionConfig,
    HorizonConfig,
    Config,
    ConfigError,
    ConfigFormat,
};
