// src/animation/state_machine.rs
//
// The deck's four-state machine. Thresholds are only checked in the resting
// states, so a transition in flight always runs to completion before the
// scroll position is looked at again.

use tracing::info;

use crate::config::AnimationConfig;

const MIN_SPEED: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Grid,
    AnimatingToStack,
    Stacked,
    AnimatingToGrid,
}

impl DeckPhase {
    pub fn is_transitioning(self) -> bool {
        matches!(self, DeckPhase::AnimatingToStack | DeckPhase::AnimatingToGrid)
    }
}

/// Reported by [`DeckState::step`] on the frame a phase changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    Started(DeckPhase),
    Landed(DeckPhase),
}

#[derive(Debug, Clone)]
pub struct DeckState {
    phase: DeckPhase,
    progress: f32,
    speed: f32,
    forward_threshold: f32,
    backward_threshold: f32,
}

impl DeckState {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            phase: DeckPhase::Grid,
            progress: 0.0,
            speed: config.speed.max(MIN_SPEED),
            forward_threshold: config.forward_threshold,
            backward_threshold: config.backward_threshold,
        }
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    /// Transition progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advances one frame given the smoothed scroll position.
    pub fn step(&mut self, scroll_position: f32) -> Option<PhaseChange> {
        match self.phase {
            DeckPhase::Grid => {
                if scroll_position >= self.forward_threshold {
                    Some(self.enter(DeckPhase::AnimatingToStack))
                } else {
                    None
                }
            }
            DeckPhase::Stacked => {
                if scroll_position <= self.backward_threshold {
                    Some(self.enter(DeckPhase::AnimatingToGrid))
                } else {
                    None
                }
            }
            DeckPhase::AnimatingToStack | DeckPhase::AnimatingToGrid => {
                self.progress = (self.progress + self.speed).min(1.0);
                if self.progress < 1.0 {
                    return None;
                }
                let landed = match self.phase {
                    DeckPhase::AnimatingToStack => DeckPhase::Stacked,
                    _ => DeckPhase::Grid,
                };
                self.phase = landed;
                info!(phase = ?landed, "deck landed");
                Some(PhaseChange::Landed(landed))
            }
        }
    }

    fn enter(&mut self, phase: DeckPhase) -> PhaseChange {
        self.phase = phase;
        self.progress = 0.0;
        info!(phase = ?phase, "deck transition started");
        PhaseChange::Started(phase)
    }
}
