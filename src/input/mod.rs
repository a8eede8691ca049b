// src/input/mod.rs
//
// The input normalizer: turns wheel, touch, key and OSC deltas into a
// bounded scroll position.

pub mod continuous;
pub mod scroll_model;
pub mod stepped;

pub use continuous::ContinuousScroll;
pub use scroll_model::{build_scroll_model, ScrollInput, ScrollModel, StepDirection};
pub use stepped::SteppedScroll;
