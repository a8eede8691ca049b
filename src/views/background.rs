// src/views/background.rs
//
// Deck backdrop: the base colour, plus a soft radial glow that swells while
// the deck moves between grid and stack.

use nannou::prelude::*;
use std::f32::consts::PI;

use crate::animation::DeckPhase;
use crate::models::Layout;

const GLOW_RINGS: usize = 12;
const GLOW_MAX_ALPHA: f32 = 0.05;

pub fn base_color() -> Rgb {
    rgb(0.0, 22.0 / 255.0, 48.0 / 255.0)
}

pub fn accent(alpha: f32) -> Rgba {
    rgba(102.0 / 255.0, 126.0 / 255.0, 234.0 / 255.0, alpha)
}

#[derive(Debug, Default)]
pub struct BackgroundManager {
    glow_intensity: f32,
}

impl BackgroundManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glow strength follows the transition, peaking halfway through.
    pub fn update(&mut self, phase: DeckPhase, progress: f32) {
        self.glow_intensity = if phase.is_transitioning() {
            (progress.clamp(0.0, 1.0) * PI).sin().max(0.0)
        } else {
            0.0
        };
    }

    #[cfg(test)]
    fn glow_intensity(&self) -> f32 {
        self.glow_intensity
    }

    pub fn draw(&self, draw: &Draw, layout: &Layout) {
        draw.background().color(base_color());
        if self.glow_intensity <= 0.0 {
            return;
        }

        // stacked translucent discs approximate a radial gradient
        let radius = layout.width.max(layout.height) * 0.6;
        let ring_alpha = GLOW_MAX_ALPHA * self.glow_intensity / GLOW_RINGS as f32;
        for ring in 0..GLOW_RINGS {
            let r = radius * (1.0 - ring as f32 / GLOW_RINGS as f32);
            draw.ellipse()
                .x_y(0.0, 0.0)
                .radius(r)
                .color(accent(ring_alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_only_while_transitioning() {
        let mut background = BackgroundManager::new();
        background.update(DeckPhase::Stacked, 0.5);
        assert_eq!(background.glow_intensity(), 0.0);

        background.update(DeckPhase::AnimatingToGrid, 0.5);
        assert!((background.glow_intensity() - 1.0).abs() < 1e-6);

        background.update(DeckPhase::AnimatingToStack, 0.0);
        assert_eq!(background.glow_intensity(), 0.0);
    }
}
