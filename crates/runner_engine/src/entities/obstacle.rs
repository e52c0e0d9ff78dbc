//! Obstacles the avatar has to avoid

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Rect, Vec2};
use crate::physics::collision::Collider;

static SMALL_CACTUS_BOXES: [Rect; 3] = [
    Rect::new(0.0, 7.0, 5.0, 27.0),
    Rect::new(4.0, 0.0, 6.0, 34.0),
    Rect::new(10.0, 4.0, 7.0, 14.0),
];

static LARGE_CACTUS_BOXES: [Rect; 3] = [
    Rect::new(0.0, 12.0, 7.0, 38.0),
    Rect::new(8.0, 0.0, 7.0, 49.0),
    Rect::new(13.0, 10.0, 10.0, 38.0),
];

static PTERODACTYL_BOXES: [Rect; 5] = [
    Rect::new(15.0, 15.0, 16.0, 5.0),
    Rect::new(18.0, 21.0, 24.0, 6.0),
    Rect::new(2.0, 14.0, 4.0, 3.0),
    Rect::new(6.0, 10.0, 4.0, 7.0),
    Rect::new(10.0, 8.0, 6.0, 9.0),
];

/// Obstacle types and their per-type geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Short cactus, groups of up to three
    SmallCactus,
    /// Tall cactus, groups of up to three
    LargeCactus,
    /// Flying obstacle, always single
    Pterodactyl,
}

impl ObstacleKind {
    /// Every obstacle type
    pub const ALL: [Self; 3] = [Self::SmallCactus, Self::LargeCactus, Self::Pterodactyl];

    /// Width of one segment
    pub const fn width(self) -> f32 {
        match self {
            Self::SmallCactus => 17.0,
            Self::LargeCactus => 25.0,
            Self::Pterodactyl => 46.0,
        }
    }

    /// Sprite height
    pub const fn height(self) -> f32 {
        match self {
            Self::SmallCactus => 35.0,
            Self::LargeCactus => 50.0,
            Self::Pterodactyl => 40.0,
        }
    }

    /// Vertical positions this type may spawn at; the first is the default
    pub const fn spawn_heights(self) -> &'static [f32] {
        match self {
            Self::SmallCactus => &[105.0],
            Self::LargeCactus => &[90.0],
            Self::Pterodactyl => &[100.0, 75.0, 50.0],
        }
    }

    /// Largest segment count this type may be drawn with
    pub const fn max_segments(self) -> u32 {
        match self {
            Self::SmallCactus | Self::LargeCactus => 3,
            Self::Pterodactyl => 1,
        }
    }

    /// Hit geometry relative to the obstacle's outer box
    pub fn collision_boxes(self) -> &'static [Rect] {
        match self {
            Self::SmallCactus => &SMALL_CACTUS_BOXES,
            Self::LargeCactus => &LARGE_CACTUS_BOXES,
            Self::Pterodactyl => &PTERODACTYL_BOXES,
        }
    }
}

/// Most sub-boxes any obstacle type carries
const MAX_BOXES: usize = 5;

/// One obstacle group in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    kind: ObstacleKind,
    size: u32,
    boxes: [Rect; MAX_BOXES],
    box_count: usize,

    /// Top-left corner of the sprite in world space
    pub position: Vec2,
}

impl Obstacle {
    /// Create an obstacle of `size` repeated segments
    ///
    /// `size` is clamped to `1..=kind.max_segments()`. For a group the middle
    /// box stretches across the inner segments and the last box moves to the
    /// right-hand end, so every segment carries hit geometry.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(kind: ObstacleKind, position: Vec2, size: u32) -> Self {
        let size = size.clamp(1, kind.max_segments());
        let template = kind.collision_boxes();

        let mut boxes = [Rect::default(); MAX_BOXES];
        boxes[..template.len()].copy_from_slice(template);

        if size > 1 {
            let width = kind.width() * size as f32;
            boxes[1].width = width - boxes[0].width - boxes[2].width;
            boxes[2].x = width - boxes[2].width;
        }

        Self {
            kind,
            size,
            boxes,
            box_count: template.len(),
            position,
        }
    }

    /// Create an obstacle at `x` on its type's default height
    pub fn spawn(kind: ObstacleKind, x: f32, size: u32) -> Self {
        Self::new(kind, Vec2::new(x, kind.spawn_heights()[0]), size)
    }

    /// Obstacle type
    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Number of repeated segments
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Scroll left by `dx` pixels
    pub fn advance(&mut self, dx: f32) {
        self.position.x -= dx;
    }

    /// False once the whole sprite has scrolled past the left edge
    pub fn is_visible(&self) -> bool {
        self.position.x + self.extent().x > 0.0
    }
}

impl Collider for Obstacle {
    fn position(&self) -> Vec2 {
        self.position
    }

    #[allow(clippy::cast_precision_loss)]
    fn extent(&self) -> Vec2 {
        Vec2::new(self.kind.width() * self.size as f32, self.kind.height())
    }

    fn collision_boxes(&self) -> &[Rect] {
        &self.boxes[..self.box_count]
    }
}
