pub mod ambient_particles;

pub use ambient_particles::{AmbientParticles, Particle, PARTICLE_COUNT};
