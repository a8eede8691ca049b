// src/input/scroll_model.rs

use crate::config::{ScrollConfig, ScrollMode};
use crate::input::{ContinuousScroll, SteppedScroll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

impl StepDirection {
    pub fn sign(self) -> f32 {
        match self {
            StepDirection::Forward => 1.0,
            StepDirection::Backward => -1.0,
        }
    }
}

/// One raw input event. Pixel deltas are positive when moving forward
/// through the deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollInput {
    Wheel(f32),
    Touch(f32),
    Key(StepDirection),
}

/// A scroll policy. Position and target always stay within `0.0..=range()`.
pub trait ScrollModel {
    /// Folds one input event into the target. `now` is the frame clock in seconds.
    fn apply(&mut self, input: ScrollInput, now: f32);
    /// Advances one frame.
    fn tick(&mut self);
    fn position(&self) -> f32;
    fn target(&self) -> f32;
    fn range(&self) -> f32;
    /// Moves the target; the position follows according to the policy.
    fn set_target(&mut self, target: f32);
    /// Jumps position and target straight to zero.
    fn reset(&mut self);

    fn velocity(&self) -> f32 {
        0.0
    }
}

pub fn build_scroll_model(config: &ScrollConfig, range: f32) -> Box<dyn ScrollModel> {
    match config.mode {
        ScrollMode::Continuous => Box::new(ContinuousScroll::new(config, range)),
        ScrollMode::Stepped => Box::new(SteppedScroll::new(config, range)),
    }
}
