//! Scrolling ground strip
//!
//! Two segments of equal width sit side by side and scroll left. When the
//! leading one has moved fully off screen it jumps behind the other and
//! picks a new texture (flat or bumpy) from the sprite sheet.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::config::HorizonConfig;
use crate::debug::draw::DrawSurface;
use crate::foundation::math::Rect;

/// Looping two-segment ground strip
#[derive(Debug, Clone)]
pub struct HorizonLine {
    config: HorizonConfig,
    fps: f32,
    source_width: f32,
    source_height: f32,
    x_pos: [f32; 2],
    source_x_pos: [f32; 2],
    rng: StdRng,
}

impl HorizonLine {
    /// Create a horizon with entropy-seeded texture selection
    pub fn new(config: HorizonConfig, fps: u32) -> Self {
        Self::with_rng(config, fps, StdRng::from_entropy())
    }

    /// Create a horizon with reproducible texture selection
    pub fn with_seed(config: HorizonConfig, fps: u32, seed: u64) -> Self {
        Self::with_rng(config, fps, StdRng::seed_from_u64(seed))
    }

    #[allow(clippy::cast_precision_loss)]
    fn with_rng(config: HorizonConfig, fps: u32, rng: StdRng) -> Self {
        let scale = if config.hidpi { 2.0 } else { 1.0 };
        let source_width = config.width * scale;
        let source_height = config.height * scale;

        Self {
            x_pos: [0.0, config.width],
            source_x_pos: [0.0, config.width],
            fps: fps as f32,
            source_width,
            source_height,
            config,
            rng,
        }
    }

    /// Screen x of both segments
    pub fn x_pos(&self) -> [f32; 2] {
        self.x_pos
    }

    /// Sprite-sheet x of both segments' textures
    pub fn source_x_pos(&self) -> [f32; 2] {
        self.source_x_pos
    }

    fn source_rect(&self, segment: usize) -> Rect {
        Rect::new(self.source_x_pos[segment], 0.0, self.source_width, self.source_height)
    }

    fn dest_rect(&self, segment: usize) -> Rect {
        Rect::new(self.x_pos[segment], self.config.y_pos, self.config.width, self.config.height)
    }

    /// Flat texture at 0, bumpy texture one on-screen width to the right
    fn random_texture(&mut self) -> f32 {
        if self.rng.gen::<f32>() > self.config.bump_threshold {
            self.config.width
        } else {
            0.0
        }
    }

    fn update_x_pos(&mut self, leading: usize, increment: f32) {
        let trailing = 1 - leading;
        let width = self.config.width;

        self.x_pos[leading] -= increment;
        self.x_pos[trailing] = self.x_pos[leading] + width;

        if self.x_pos[leading] <= -width {
            self.x_pos[leading] += width * 2.0;
            self.x_pos[trailing] = self.x_pos[leading] - width;
            self.source_x_pos[leading] = self.random_texture();
        }
    }

    /// Scroll by `speed` pixels per frame over `delta_ms` milliseconds
    pub fn update(&mut self, delta_ms: f32, speed: f32) {
        let increment = (speed * self.fps * delta_ms / 1000.0).floor();

        if self.x_pos[0] <= 0.0 {
            self.update_x_pos(0, increment);
        } else {
            self.update_x_pos(1, increment);
        }
    }

    /// Blit both segments
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for segment in 0..self.x_pos.len() {
            surface.draw_sprite(&self.source_rect(segment), &self.dest_rect(segment));
        }
    }

    /// Back to the starting position; textures are kept
    pub fn reset(&mut self) {
        self.x_pos = [0.0, self.config.width];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::draw::{DebugCanvas, DebugShape};
    use approx::assert_relative_eq;

    const FPS: u32 = 50;
    const FRAME_MS: f32 = 20.0;

    fn horizon() -> HorizonLine {
        HorizonLine::with_seed(HorizonConfig::default(), FPS, 7)
    }

    #[test]
    fn test_starts_side_by_side() {
        let horizon = horizon();
        assert_eq!(horizon.x_pos(), [0.0, 600.0]);
        assert_eq!(horizon.source_x_pos(), [0.0, 600.0]);
    }

    #[test]
    fn test_one_frame_moves_by_speed() {
        let mut horizon = horizon();
        horizon.update(FRAME_MS, 6.0);
        assert_relative_eq!(horizon.x_pos()[0], -6.0);
        assert_relative_eq!(horizon.x_pos()[1], 594.0);
    }

    #[test]
    fn test_increment_is_floored() {
        let mut horizon = horizon();
        horizon.update(FRAME_MS, 6.9);
        assert_relative_eq!(horizon.x_pos()[0], -6.0);
    }

    #[test]
    fn test_segments_stay_adjacent_and_wrap() {
        let mut horizon = horizon();
        for _ in 0..1000 {
            horizon.update(FRAME_MS, 13.0);
            let [a, b] = horizon.x_pos();
            assert_relative_eq!((a - b).abs(), 600.0);
            assert!(a.min(b) > -600.0 && a.min(b) <= 0.0, "{a} {b}");
        }
    }

    #[test]
    fn test_wrap_moves_leading_segment_behind() {
        let mut horizon = horizon();
        // 100 frames at 6px reaches exactly -600.
        for _ in 0..100 {
            horizon.update(FRAME_MS, 6.0);
        }
        assert_eq!(horizon.x_pos(), [600.0, 0.0]);

        horizon.update(FRAME_MS, 6.0);
        assert_eq!(horizon.x_pos(), [594.0, -6.0]);
    }

    #[test]
    fn test_wrapped_textures_are_flat_or_bumpy() {
        let mut horizon = horizon();
        for _ in 0..2000 {
            horizon.update(FRAME_MS, 10.0);
            for source_x in horizon.source_x_pos() {
                assert!(source_x == 0.0 || source_x == 600.0);
            }
        }
    }

    #[test]
    fn test_threshold_one_is_always_flat() {
        let config = HorizonConfig {
            bump_threshold: 1.0,
            ..HorizonConfig::default()
        };
        let mut horizon = HorizonLine::with_seed(config, FPS, 1);
        for _ in 0..500 {
            horizon.update(FRAME_MS, 12.0);
        }
        // Both segments have wrapped by now.
        assert_eq!(horizon.source_x_pos(), [0.0, 0.0]);
    }

    #[test]
    fn test_same_seed_same_textures() {
        let mut a = horizon();
        let mut b = horizon();
        for _ in 0..800 {
            a.update(FRAME_MS, 9.0);
            b.update(FRAME_MS, 9.0);
            assert_eq!(a.source_x_pos(), b.source_x_pos());
        }
    }

    #[test]
    fn test_hidpi_doubles_source_size_only() {
        let config = HorizonConfig {
            hidpi: true,
            ..HorizonConfig::default()
        };
        let horizon = HorizonLine::with_seed(config, FPS, 3);
        let mut canvas = DebugCanvas::new();

        horizon.draw(&mut canvas);

        assert_eq!(horizon.source_x_pos(), [0.0, 600.0]);
        assert_eq!(
            canvas.shapes()[1],
            DebugShape::Sprite {
                source: Rect::new(600.0, 0.0, 1200.0, 24.0),
                dest: Rect::new(600.0, 127.0, 600.0, 12.0),
            }
        );
    }

    #[test]
    fn test_hidpi_bumpy_offset_is_screen_width() {
        let config = HorizonConfig {
            hidpi: true,
            bump_threshold: 0.0,
            ..HorizonConfig::default()
        };
        let mut horizon = HorizonLine::with_seed(config, FPS, 5);
        for _ in 0..500 {
            horizon.update(FRAME_MS, 12.0);
        }
        assert_eq!(horizon.source_x_pos(), [600.0, 600.0]);
    }

    #[test]
    fn test_draw_after_wrap_uses_both_segments() {
        let mut horizon = horizon();
        for _ in 0..150 {
            horizon.update(FRAME_MS, 6.0);
        }
        let mut canvas = DebugCanvas::new();

        horizon.draw(&mut canvas);

        assert_eq!(canvas.shape_count(), 2);
        let dests: Vec<f32> = canvas
            .shapes()
            .iter()
            .filter_map(|shape| match shape {
                DebugShape::Sprite { dest, .. } => Some(dest.x),
                DebugShape::Rect { .. } => None,
            })
            .collect();
        assert_eq!(dests, horizon.x_pos().to_vec());
    }

    #[test]
    fn test_draw_blits_both_segments() {
        let horizon = horizon();
        let mut canvas = DebugCanvas::new();

        horizon.draw(&mut canvas);

        assert_eq!(
            canvas.shapes(),
            &[
                DebugShape::Sprite {
                    source: Rect::new(0.0, 0.0, 600.0, 12.0),
                    dest: Rect::new(0.0, 127.0, 600.0, 12.0),
                },
                DebugShape::Sprite {
                    source: Rect::new(600.0, 0.0, 600.0, 12.0),
                    dest: Rect::new(600.0, 127.0, 600.0, 12.0),
                },
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut horizon = horizon();
        for _ in 0..37 {
            horizon.update(FRAME_MS, 7.0);
        }
        horizon.reset();
        assert_eq!(horizon.x_pos(), [0.0, 600.0]);
    }
}
