// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathConfig {
    pub services_file: String,
    pub image_directory: String,
}

/// Which scroll policy drives the deck. Chosen once at start-up.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    #[default]
    Continuous,
    Stepped,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScrollConfig {
    pub mode: ScrollMode,
    pub sensitivity: f32,      // scroll units per pixel of wheel delta
    pub touch_multiplier: f32, // touch drags move less than wheels per pixel
    pub line_height: f32,      // pixels per wheel "line"
    pub smoothing: f32,        // lerp factor toward the target, per frame
    pub velocity_damping: f32, // velocity multiplier, per frame
    pub key_step: f32,         // scroll units per arrow key press
    pub debounce: f32,         // seconds of blocked input after a step
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            mode: ScrollMode::Continuous,
            sensitivity: 0.003,
            touch_multiplier: 2.5,
            line_height: 100.0,
            smoothing: 0.15,
            velocity_damping: 0.95,
            key_step: 1.0,
            debounce: 0.25,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub speed: f32,            // grid <-> stack progress per frame
    pub swap_speed: f32,       // active card swap progress per frame
    pub panel_fade_speed: f32, // service panel alpha per frame
    pub forward_threshold: f32,
    pub backward_threshold: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 0.015,
            swap_speed: 0.06,
            panel_fade_speed: 0.08,
            forward_threshold: 0.9,
            backward_threshold: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayoutConfig {
    pub base_width: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub card_size: f32,
    pub target_size: f32,
    pub card_spacing: f32,
    pub columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: 1200.0,
            min_scale: 0.6,
            max_scale: 1.2,
            card_size: 240.0,
            target_size: 480.0,
            card_spacing: 350.0,
            columns: 4,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9010,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
