//! Headless runner simulation
//!
//! Fixed-step frame loop: scroll scenery, move the obstacle, let a simple
//! autopilot jump, and stop at the first collision.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use runner_engine::entities::AVATAR_WIDTH;
use runner_engine::prelude::*;

/// Avatar's resting y position
const GROUND_Y: f32 = 93.0;
const AVATAR_X: f32 = 50.0;
const INITIAL_JUMP_VELOCITY: f32 = -10.0;
const GRAVITY: f32 = 0.6;
const START_SPEED: f32 = 6.0;
const MAX_SPEED: f32 = 13.0;
const ACCELERATION: f32 = 0.001;
const SPAWN_X: f32 = 600.0;
const MIN_GAP: f32 = 120.0;
const MAX_GAP: f32 = 400.0;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// The avatar hit an obstacle
    Crashed {
        /// Frame the collision happened on
        frame: u64,
        /// Colliding sub-boxes
        pair: CollisionPair,
        /// Type of the obstacle that was hit
        kind: ObstacleKind,
    },
    /// The frame limit was reached without a collision
    Survived {
        /// Frames simulated
        frames: u64,
    },
}

/// Vertical jump state of the avatar
#[derive(Debug, Clone, Copy, Default)]
struct Jump {
    velocity: f32,
    airborne: bool,
}

/// Game state for one run
pub struct RunnerGame {
    config: RunnerConfig,
    avatar: Avatar,
    jump: Jump,
    obstacle: Option<Obstacle>,
    obstacles_passed: u32,
    horizon: HorizonLine,
    collision: CollisionSystem,
    canvas: DebugCanvas,
    speed: f32,
    distance: f32,
    rng: StdRng,
}

impl RunnerGame {
    /// Create a run with a reproducible obstacle sequence
    pub fn new(config: RunnerConfig, seed: u64) -> Self {
        let horizon = HorizonLine::with_seed(config.horizon.clone(), config.engine.fps, seed);
        let collision = CollisionSystem::new().with_colors(config.collision.colors);

        Self {
            avatar: Avatar::new(Vec2::new(AVATAR_X, GROUND_Y)),
            jump: Jump::default(),
            obstacle: None,
            obstacles_passed: 0,
            horizon,
            collision,
            canvas: DebugCanvas::new(),
            speed: START_SPEED,
            distance: 0.0,
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            config,
        }
    }

    /// Obstacles that scrolled past without a collision
    pub fn obstacles_passed(&self) -> u32 {
        self.obstacles_passed
    }

    /// Distance covered in pixels
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Boxes and sprites drawn during the last frame
    pub fn debug_canvas(&self) -> &DebugCanvas {
        &self.canvas
    }

    /// Run until a collision or `max_frames`
    pub fn run(&mut self, max_frames: u64) -> RunOutcome {
        #[allow(clippy::cast_precision_loss)]
        let frame_ms = 1000.0 / self.config.engine.fps as f32;

        for frame in 0..max_frames {
            if let Some((pair, kind)) = self.step(frame_ms) {
                log::warn!(
                    "Game over at frame {} after {:.0}px: {:?} hit {:?}",
                    frame,
                    self.distance,
                    pair.avatar,
                    pair.obstacle
                );
                return RunOutcome::Crashed { frame, pair, kind };
            }
        }

        log::info!("Survived {} frames, {} obstacles passed", max_frames, self.obstacles_passed);
        RunOutcome::Survived { frames: max_frames }
    }

    /// Advance one frame, returning the collision if there was one
    fn step(&mut self, frame_ms: f32) -> Option<(CollisionPair, ObstacleKind)> {
        let debug_draw = self.config.collision.debug_draw;
        self.canvas.clear();

        self.horizon.update(frame_ms, self.speed);
        if debug_draw {
            self.horizon.draw(&mut self.canvas);
        }

        self.update_obstacle();
        self.update_avatar();

        self.distance += self.speed;
        self.speed = (self.speed + ACCELERATION).min(MAX_SPEED);

        let obstacle = self.obstacle.as_ref()?;
        let surface: Option<&mut dyn DrawSurface> = if debug_draw {
            Some(&mut self.canvas)
        } else {
            None
        };

        self.collision
            .check(&self.avatar, obstacle, surface)
            .map(|pair| (pair, obstacle.kind()))
    }

    fn update_obstacle(&mut self) {
        if let Some(obstacle) = self.obstacle.as_mut() {
            obstacle.advance(self.speed);
            if !obstacle.is_visible() {
                self.obstacles_passed += 1;
                log::debug!("Obstacle {:?} passed", obstacle.kind());
                self.obstacle = None;
            }
        }

        if self.obstacle.is_none() {
            self.obstacle = Some(self.spawn_obstacle());
        }
    }

    fn spawn_obstacle(&mut self) -> Obstacle {
        let kind = ObstacleKind::ALL[self.rng.gen_range(0..ObstacleKind::ALL.len())];
        let size = self.rng.gen_range(1..=kind.max_segments());
        let heights = kind.spawn_heights();
        let y = heights[self.rng.gen_range(0..heights.len())];
        let x = SPAWN_X + self.rng.gen_range(MIN_GAP..MAX_GAP);

        log::debug!("Spawning {:?} x{} at ({}, {})", kind, size, x, y);
        Obstacle::new(kind, Vec2::new(x, y), size)
    }

    fn update_avatar(&mut self) {
        if !self.jump.airborne {
            if let Some(obstacle) = &self.obstacle {
                // Autopilot with a sloppy reaction distance.
                let gap = obstacle.position.x - (self.avatar.position.x + AVATAR_WIDTH);
                let reaction = self.rng.gen_range(20.0_f32..90.0);
                if gap > 0.0 && gap < reaction {
                    self.jump = Jump {
                        velocity: INITIAL_JUMP_VELOCITY,
                        airborne: true,
                    };
                }
            }
        }

        if self.jump.airborne {
            self.avatar.position.y += self.jump.velocity;
            self.jump.velocity += GRAVITY;

            if self.avatar.position.y >= GROUND_Y {
                self.avatar.position.y = GROUND_Y;
                self.jump = Jump::default();
            }
        }
    }
}
