//! Runner demo application
//!
//! Runs the collision core headlessly: an autopilot avatar against a
//! random stream of obstacles until the first crash.
//!
//! Usage: `runner_demo [config.toml|config.ron] [seed]`

mod game;

use runner_engine::foundation::logging;
use runner_engine::prelude::*;

use game::{RunOutcome, RunnerGame};

/// Frames simulated before the run is called a survival
const MAX_FRAMES: u64 = 60 * 60 * 5;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Seed argument was not a number
    #[error("Invalid seed '{0}'")]
    InvalidSeed(String),
}

fn load_config(path: Option<&str>) -> Result<RunnerConfig, AppError> {
    match path {
        Some(path) => Ok(RunnerConfig::load_from_file(path)?),
        None => Ok(RunnerConfig::default()),
    }
}

fn parse_seed(arg: Option<&str>) -> Result<u64, AppError> {
    arg.map_or(Ok(0x5eed), |text| {
        text.parse().map_err(|_| AppError::InvalidSeed(text.to_string()))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let config = load_config(args.get(1).map(String::as_str))?;
    let seed = parse_seed(args.get(2).map(String::as_str))?;

    logging::init_with_level(&config.engine.log_level);
    log::info!("Starting runner demo (seed {seed}, {} fps)", config.engine.fps);
    if config.collision.debug_draw {
        log::info!("Collision debug overlay enabled");
    }

    let mut game = RunnerGame::new(config, seed);
    match game.run(MAX_FRAMES) {
        RunOutcome::Crashed { frame, kind, .. } => {
            log::info!(
                "Crashed into {:?} on frame {} ({} obstacles cleared, {:.0}px)",
                kind,
                frame,
                game.obstacles_passed(),
                game.distance()
            );
        }
        RunOutcome::Survived { frames } => {
            log::info!("No collision in {frames} frames");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/runner.toml");
        assert_eq!(load_config(Some(path)).unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_unsupported_config_extension() {
        assert!(matches!(
            load_config(Some("runner.json")),
            Err(AppError::Config(ConfigError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_seed_parsing() {
        assert_eq!(parse_seed(Some("17")).unwrap(), 17);
        assert_eq!(parse_seed(None).unwrap(), 0x5eed);
        assert!(matches!(parse_seed(Some("abc")), Err(AppError::InvalidSeed(_))));
    }
}
