// src/effects/ambient_particles.rs
//
// The faint particles that drift around the stack anchor while the deck is
// transitioning between grid and stack.

use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

pub const PARTICLE_COUNT: usize = 8;
const PHASE_STEP: f32 = 0.5;
const PHASE_JITTER: f32 = 0.2;
const MAX_ALPHA: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub diameter: f32,
}

#[derive(Debug, Clone)]
pub struct AmbientParticles {
    phases: Vec<f32>,
}

impl AmbientParticles {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let phases = (0..PARTICLE_COUNT)
            .map(|i| i as f32 * PHASE_STEP + rng.gen_range(-PHASE_JITTER..=PHASE_JITTER))
            .collect();
        Self { phases }
    }

    #[cfg(test)]
    fn with_phases(phases: Vec<f32>) -> Self {
        Self { phases }
    }

    /// Particle opacity for a transition at `progress`; peaks mid-flight.
    pub fn alpha(progress: f32) -> f32 {
        ((progress.clamp(0.0, 1.0) * PI).sin() * MAX_ALPHA).max(0.0)
    }

    /// Screen-space particles orbiting `anchor` at `time` seconds.
    pub fn particles(&self, time: f32, anchor: Vec2, scale: f32) -> Vec<Particle> {
        self.phases
            .iter()
            .map(|phase| {
                let t = time + phase;
                Particle {
                    position: anchor
                        + vec2((t * 0.8).sin() * 100.0 * scale, (t * 0.6).cos() * 80.0 * scale),
                    diameter: 2.0 + (t * 2.0).sin(),
                }
            })
            .collect()
    }
}

impl Default for AmbientParticles {
    fn default() -> Self {
        Self::new()
    }
}
