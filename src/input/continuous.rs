// src/input/continuous.rs
//
// Continuous scrolling: input moves a target, the position eases toward it.

use tracing::trace;

use super::{ScrollInput, ScrollModel};
use crate::config::ScrollConfig;
use crate::utilities::easing::lerp;

// once this close, the position lands exactly on the target
const SNAP_EPSILON: f32 = 0.0005;
const VELOCITY_FLOOR: f32 = 0.0001;

#[derive(Debug, Clone)]
pub struct ContinuousScroll {
    position: f32,
    target: f32,
    velocity: f32,
    range: f32,

    sensitivity: f32,
    touch_multiplier: f32,
    key_step: f32,
    smoothing: f32,
    damping: f32,
}

impl ContinuousScroll {
    pub fn new(config: &ScrollConfig, range: f32) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            velocity: 0.0,
            range: range.max(0.0),
            sensitivity: config.sensitivity,
            touch_multiplier: config.touch_multiplier,
            key_step: config.key_step,
            smoothing: config.smoothing.clamp(0.01, 1.0),
            damping: config.velocity_damping.clamp(0.0, 1.0),
        }
    }

    fn delta_for(&self, input: ScrollInput) -> f32 {
        match input {
            ScrollInput::Wheel(pixels) => pixels * self.sensitivity,
            ScrollInput::Touch(pixels) => pixels * self.sensitivity * self.touch_multiplier,
            ScrollInput::Key(direction) => direction.sign() * self.key_step,
        }
    }
}

impl ScrollModel for ContinuousScroll {
    fn apply(&mut self, input: ScrollInput, _now: f32) {
        let delta = self.delta_for(input);
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        self.target = (self.target + delta).clamp(0.0, self.range);
        self.velocity += delta * 0.5;
        trace!(target = self.target, delta, "scroll input");
    }

    fn tick(&mut self) {
        self.position = lerp(self.position, self.target, self.smoothing);
        if (self.target - self.position).abs() < SNAP_EPSILON {
            self.position = self.target;
        }
        self.position = self.position.clamp(0.0, self.range);

        self.velocity *= self.damping;
        if self.velocity.abs() < VELOCITY_FLOOR {
            self.velocity = 0.0;
        }
    }

    fn position(&self) -> f32 {
        self.position
    }

    fn target(&self) -> f32 {
        self.target
    }

    fn range(&self) -> f32 {
        self.range
    }

    fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target.clamp(0.0, self.range);
        }
    }

    fn reset(&mut self) {
        self.position = 0.0;
        self.target = 0.0;
        self.velocity = 0.0;
    }

    fn velocity(&self) -> f32 {
        self.velocity
    }
}
