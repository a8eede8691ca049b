// src/models/layout.rs
//
// Viewport-dependent geometry of the deck.
//
// Layout positions live in screen space: origin at the top left, y growing
// downward. The renderer converts to nannou's centred, y-up space at the end.

use nannou::prelude::*;

use crate::config::LayoutConfig;

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
    pub card_size: f32,
    pub target_size: f32,
    pub card_spacing: f32,
    pub columns: usize,
    pub card_count: usize,
}

impl Layout {
    pub fn new(width: f32, height: f32, card_count: usize, config: &LayoutConfig) -> Self {
        let scale_factor = Self::scale_factor_for(width, config);
        Self {
            width,
            height,
            scale_factor,
            card_size: config.card_size * scale_factor,
            target_size: config.target_size * scale_factor,
            card_spacing: config.card_spacing * scale_factor,
            columns: config.columns.max(1),
            card_count,
        }
    }

    /// Responsive scale relative to the base width, clamped to the configured band.
    pub fn scale_factor_for(width: f32, config: &LayoutConfig) -> f32 {
        let low = config.min_scale.min(config.max_scale);
        let high = config.min_scale.max(config.max_scale);
        let raw = if config.base_width > 0.0 {
            width / config.base_width
        } else {
            1.0
        };
        raw.clamp(low, high)
    }

    pub fn rows(&self) -> usize {
        self.card_count.div_ceil(self.columns).max(1)
    }

    /// Grid home of a card, centred in the viewport.
    pub fn home(&self, index: usize) -> Vec2 {
        let grid_width = self.columns as f32 * self.card_spacing;
        let grid_height = self.rows() as f32 * self.card_spacing;
        let start_x = self.width / 2.0 - grid_width / 2.0 + self.card_spacing / 2.0;
        let start_y = self.height / 2.0 - grid_height / 2.0 + self.card_spacing / 2.0;

        let row = index / self.columns;
        let col = index % self.columns;
        vec2(
            start_x + col as f32 * self.card_spacing,
            start_y + row as f32 * self.card_spacing,
        )
    }

    /// Where the deck gathers: the centre of the left half.
    pub fn stack_anchor(&self) -> Vec2 {
        vec2(self.width * 0.25, self.height * 0.5)
    }

    pub fn slide_distance(&self) -> f32 {
        150.0 * self.scale_factor
    }

    // screen space (top-left origin, y down) to nannou space (centre origin, y up)
    pub fn to_draw_space(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}
