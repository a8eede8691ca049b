// src/controllers/content_sync.rs
//
// Keeps the service text panel in step with the deck: the column offset
// follows the swap focus, the panel fades with the stacked state, and the
// swap phase decides which entry is emphasised.

use crate::animation::{CardSwap, DeckPhase, SwapPhase};
use crate::utilities::easing::lerp;

/// Alpha of entries that are not the focus.
pub const DIMMED: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct ContentSync {
    offset: f32,
    panel_alpha: f32,
    fade_speed: f32,
}

impl ContentSync {
    pub fn new(fade_speed: f32) -> Self {
        Self {
            offset: 0.0,
            panel_alpha: 0.0,
            fade_speed: fade_speed.clamp(0.001, 1.0),
        }
    }

    /// Advances one frame.
    pub fn update(&mut self, phase: DeckPhase, swap: &CardSwap) {
        let target = if phase == DeckPhase::Stacked { 1.0 } else { 0.0 };
        if self.panel_alpha < target {
            self.panel_alpha = (self.panel_alpha + self.fade_speed).min(target);
        } else {
            self.panel_alpha = (self.panel_alpha - self.fade_speed).max(target);
        }
        self.offset = swap.focus_position();
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    /// Scroll offset of the text column, in entries.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Vertical translation of the text column for a given entry height.
    pub fn translation(&self, entry_height: f32) -> f32 {
        -self.offset * entry_height
    }

    pub fn panel_alpha(&self) -> f32 {
        self.panel_alpha
    }

    pub fn is_visible(&self) -> bool {
        self.panel_alpha > 0.0
    }

    /// Emphasis of one entry, `DIMMED..=1.0`.
    pub fn entry_alpha(&self, index: usize, swap: &CardSwap) -> f32 {
        let local = swap.phase_progress();
        match swap.phase() {
            SwapPhase::Settled => {
                if index == swap.to() {
                    1.0
                } else {
                    DIMMED
                }
            }
            SwapPhase::FadingOut if index == swap.from() => lerp(1.0, DIMMED, local),
            SwapPhase::FadingIn if index == swap.to() => lerp(DIMMED, 1.0, local),
            _ => DIMMED,
        }
    }
}
