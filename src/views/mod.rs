// src/views/mod.rs

pub mod background;

pub use background::{accent, base_color, BackgroundManager};
