// src/animation/card_swap.rs
//
// Frame-driven swap of the active card in the stacked deck.
//
// A swap in flight always completes. A new target requested meanwhile is
// parked in `pending` (latest request wins) and starts on the frame the
// current swap settles, so no card is ever left half faded.

use tracing::debug;

use crate::utilities::easing::{ease_in_out_cubic, lerp};

const MIN_SPEED: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    FadingOut,
    Swapping,
    FadingIn,
    Settled,
}

#[derive(Debug, Clone)]
pub struct CardSwap {
    from: usize,
    to: usize,
    progress: f32,
    pending: Option<usize>,
    speed: f32,
}

impl CardSwap {
    pub fn settled(index: usize, speed: f32) -> Self {
        Self {
            from: index,
            to: index,
            progress: 1.0,
            pending: None,
            speed: speed.max(MIN_SPEED),
        }
    }

    /// Asks for `index` to become the centred card.
    pub fn request(&mut self, index: usize) {
        if self.is_settled() {
            self.pending = None;
            if index != self.to {
                self.begin(index);
            }
        } else if index == self.to {
            self.pending = None;
        } else {
            self.pending = Some(index);
        }
    }

    /// Drops any animation and centres `index` immediately.
    pub fn reset_to(&mut self, index: usize) {
        self.from = index;
        self.to = index;
        self.progress = 1.0;
        self.pending = None;
    }

    /// Advances one frame. Returns true on the frame a swap settles.
    pub fn tick(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        self.progress = (self.progress + self.speed).min(1.0);
        if self.progress < 1.0 {
            return false;
        }

        self.from = self.to;
        debug!(card = self.to, "card swap settled");
        if let Some(next) = self.pending.take() {
            if next != self.to {
                self.begin(next);
            }
        }
        true
    }

    fn begin(&mut self, index: usize) {
        debug!(from = self.to, to = index, "card swap started");
        self.from = self.to;
        self.to = index;
        self.progress = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0 || self.from == self.to
    }

    pub fn phase(&self) -> SwapPhase {
        if self.is_settled() {
            SwapPhase::Settled
        } else if self.progress < 1.0 / 3.0 {
            SwapPhase::FadingOut
        } else if self.progress < 2.0 / 3.0 {
            SwapPhase::Swapping
        } else {
            SwapPhase::FadingIn
        }
    }

    /// Progress through the current phase, `0.0..=1.0`.
    pub fn phase_progress(&self) -> f32 {
        match self.phase() {
            SwapPhase::Settled => 1.0,
            SwapPhase::FadingOut => self.progress * 3.0,
            SwapPhase::Swapping => (self.progress - 1.0 / 3.0) * 3.0,
            SwapPhase::FadingIn => ((self.progress - 2.0 / 3.0) * 3.0).min(1.0),
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[cfg(test)]
    fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn eased(&self) -> f32 {
        if self.is_settled() {
            1.0
        } else {
            ease_in_out_cubic(self.progress)
        }
    }

    /// The focus as a continuous card index, sliding from `from` to `to`.
    pub fn focus_position(&self) -> f32 {
        lerp(self.from as f32, self.to as f32, self.eased())
    }

    /// +1 when moving deeper into the deck, -1 when moving back.
    pub fn direction(&self) -> f32 {
        if self.to >= self.from {
            1.0
        } else {
            -1.0
        }
    }
}
