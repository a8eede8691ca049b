// src/input/stepped.rs
//
// Discrete stepping: every accepted event moves exactly one card, then input
// is blocked for the debounce window. Time comes from the frame clock.

use tracing::trace;

use super::{ScrollInput, ScrollModel};
use crate::config::ScrollConfig;

#[derive(Debug, Clone)]
pub struct SteppedScroll {
    position: f32,
    range: f32,
    debounce: f32,
    blocked_until: Option<f32>,
}

impl SteppedScroll {
    pub fn new(config: &ScrollConfig, range: f32) -> Self {
        Self {
            position: 0.0,
            range: range.max(0.0).floor(),
            debounce: config.debounce.max(0.0),
            blocked_until: None,
        }
    }

    fn is_blocked(&self, now: f32) -> bool {
        self.blocked_until.is_some_and(|until| now < until)
    }
}

impl ScrollModel for SteppedScroll {
    fn apply(&mut self, input: ScrollInput, now: f32) {
        let sign = match input {
            ScrollInput::Wheel(pixels) | ScrollInput::Touch(pixels) => {
                if pixels == 0.0 || !pixels.is_finite() {
                    return;
                }
                pixels.signum()
            }
            ScrollInput::Key(direction) => direction.sign(),
        };
        if self.is_blocked(now) {
            return;
        }

        self.position = (self.position.round() + sign).clamp(0.0, self.range);
        self.blocked_until = Some(now + self.debounce);
        trace!(position = self.position, "scroll step");
    }

    fn tick(&mut self) {}

    fn position(&self) -> f32 {
        self.position
    }

    fn target(&self) -> f32 {
        self.position
    }

    fn range(&self) -> f32 {
        self.range
    }

    fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.position = target.round().clamp(0.0, self.range);
        }
    }

    fn reset(&mut self) {
        self.position = 0.0;
        self.blocked_until = None;
    }
}
