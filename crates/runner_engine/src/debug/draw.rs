//! Debug drawing surface and a recording implementation
//!
//! [`DrawSurface`] is the narrow drawing interface the engine talks to. It
//! mirrors a 2D canvas: a stroke colour that is part of a save/restore
//! state stack, rectangle outlines, and sprite-sheet blits. Real renderers
//! implement it; [`DebugCanvas`] records the calls so a renderer (or a test)
//! can consume them later.

use crate::foundation::math::{Rect, Vec4};

/// Canvas-like drawing target
pub trait DrawSurface {
    /// Push the current drawing state
    fn save(&mut self);

    /// Pop the last saved drawing state. Unbalanced calls are ignored.
    fn restore(&mut self);

    /// Set the colour used by subsequent [`DrawSurface::stroke_rect`] calls
    fn set_stroke_color(&mut self, color: Vec4);

    /// Outline a rectangle with the current stroke colour
    fn stroke_rect(&mut self, rect: &Rect);

    /// Copy `source` from the sprite sheet onto `dest`
    fn draw_sprite(&mut self, source: &Rect, dest: &Rect);
}

/// Something drawn onto a [`DebugCanvas`]
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Rectangle outline
    Rect {
        /// Outlined rectangle
        rect: Rect,
        /// Stroke colour at the time of drawing
        color: Vec4,
    },

    /// Sprite-sheet blit
    Sprite {
        /// Region of the sprite sheet
        source: Rect,
        /// Where it lands on screen
        dest: Rect,
    },
}

/// Transient drawing state covered by save/restore
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    /// Current stroke colour
    pub stroke_color: Vec4,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            stroke_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Recording draw surface
///
/// Keeps every shape drawn since the last [`DebugCanvas::clear`] in draw
/// order, and tracks the state stack exactly like a canvas would.
#[derive(Debug)]
pub struct DebugCanvas {
    shapes: Vec<DebugShape>,
    state: DrawState,
    saved: Vec<DrawState>,

    /// Master enable/disable flag; when false draws are dropped
    pub enabled: bool,
}

impl DebugCanvas {
    /// Create a new, enabled canvas
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            state: DrawState::default(),
            saved: Vec::new(),
            enabled: true,
        }
    }

    /// Current drawing state
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Number of states currently saved
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Shapes drawn so far, in draw order
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// Only the rectangle outlines, in draw order
    pub fn stroked_rects(&self) -> Vec<(Rect, Vec4)> {
        self.shapes
            .iter()
            .filter_map(|shape| match shape {
                DebugShape::Rect { rect, color } => Some((*rect, *color)),
                DebugShape::Sprite { .. } => None,
            })
            .collect()
    }

    /// Get the number of recorded shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Drop recorded shapes, typically once per frame after presenting
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl Default for DebugCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for DebugCanvas {
    fn save(&mut self) {
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_stroke_color(&mut self, color: Vec4) {
        self.state.stroke_color = color;
    }

    fn stroke_rect(&mut self, rect: &Rect) {
        if !self.enabled {
            return;
        }

        self.shapes.push(DebugShape::Rect {
            rect: *rect,
            color: self.state.stroke_color,
        });
    }

    fn draw_sprite(&mut self, source: &Rect, dest: &Rect) {
        if !self.enabled {
            return;
        }

        self.shapes.push(DebugShape::Sprite {
            source: *source,
            dest: *dest,
        });
    }
}
