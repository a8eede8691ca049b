pub mod easing;
