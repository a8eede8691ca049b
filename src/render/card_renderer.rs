// src/render/card_renderer.rs
//
// Draws one card: motion trail, shadows, glow halo, the rounded card face and
// its image. All alphas here are on the 0..=255 scale used by CardPose.

use nannou::prelude::*;

use super::shapes::{corner_radius, rounded_square};
use crate::models::{Card, CardPose, Layout};
use crate::views::{accent, base_color};

const MAX_SHADOW_LAYERS: usize = 4;
const GLOW_RINGS: usize = 3;
const TRAIL_GLOW_MIN: f32 = 10.0;
const HALO_GLOW_MIN: f32 = 5.0;

const CARD_RADIUS: f32 = 15.0;
const GLOW_RADIUS: f32 = 18.0;
const TRAIL_RADIUS: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub offset: Vec2, // nannou space, relative to the card centre
    pub size: f32,
    pub alpha: f32,
}

pub fn shadow_layers(pose: &CardPose) -> Vec<Layer> {
    if pose.elevation <= 0.0 {
        return Vec::new();
    }
    let count = ((pose.elevation / 3.0).ceil() as usize).clamp(1, MAX_SHADOW_LAYERS);
    (0..count)
        .map(|i| {
            let offset = (pose.elevation / count as f32) * (i + 1) as f32 * 0.8;
            Layer {
                offset: vec2(offset * 0.6, -offset),
                size: pose.size + i as f32 * 2.0,
                alpha: ((40.0 - i as f32 * 8.0) * (pose.alpha / 255.0) * (pose.elevation / 12.0))
                    .clamp(0.0, 255.0),
            }
        })
        .collect()
}

pub fn glow_rings(pose: &CardPose) -> Vec<Layer> {
    if pose.glow <= HALO_GLOW_MIN {
        return Vec::new();
    }
    (0..GLOW_RINGS)
        .map(|i| Layer {
            offset: Vec2::ZERO,
            size: pose.size + i as f32 * 8.0,
            alpha: ((pose.glow / 3.0) * (GLOW_RINGS - i) as f32 * 0.1).clamp(0.0, 255.0),
        })
        .collect()
}

/// Ghosts left behind by a fast-moving card, oldest first, in screen space.
pub fn trail_ghosts(card: &Card) -> Vec<Layer> {
    let trail = card.trail();
    if trail.len() < 2 || card.pose.glow <= TRAIL_GLOW_MIN {
        return Vec::new();
    }
    let len = trail.len() as f32;
    trail
        .iter()
        .take(trail.len() - 1)
        .enumerate()
        .map(|(i, point)| Layer {
            offset: point.position,
            size: card.pose.size * (0.8 + i as f32 * 0.05),
            alpha: point.glow * (i as f32 / len) * 0.3,
        })
        .collect()
}

pub fn border_alpha(pose: &CardPose, highlighted: bool) -> f32 {
    let border_glow = if highlighted || pose.glow > HALO_GLOW_MIN {
        pose.glow / 4.0
    } else {
        0.0
    };
    (50.0 + border_glow).min(100.0) * (pose.alpha / 255.0)
}

pub fn draw_card(
    draw: &Draw,
    layout: &Layout,
    card: &Card,
    highlighted: bool,
    texture: Option<&wgpu::Texture>,
) {
    let pose = &card.pose;
    let base_size = layout.card_size;

    for ghost in trail_ghosts(card) {
        let centre = layout.to_draw_space(ghost.offset);
        let points = rounded_square(ghost.size, corner_radius(ghost.size, TRAIL_RADIUS, base_size));
        draw.x_y(centre.x, centre.y)
            .polygon()
            .color(accent(ghost.alpha / 255.0))
            .points(points);
    }

    let centre = layout.to_draw_space(pose.position);
    let local = draw
        .x_y(centre.x, centre.y)
        .rotate(-pose.rotation.to_radians())
        .scale(pose.scale.max(0.01));

    for shadow in shadow_layers(pose) {
        let points = rounded_square(shadow.size, corner_radius(shadow.size, CARD_RADIUS, base_size));
        local
            .x_y(shadow.offset.x, shadow.offset.y)
            .polygon()
            .color(rgba(0.0, 0.0, 0.0, shadow.alpha / 255.0))
            .points(points);
    }

    for ring in glow_rings(pose) {
        let points = rounded_square(ring.size, corner_radius(ring.size, GLOW_RADIUS, base_size));
        local
            .polygon()
            .color(accent(ring.alpha / 255.0))
            .points(points);
    }

    let face = rounded_square(pose.size, corner_radius(pose.size, CARD_RADIUS, base_size));
    let stroke_weight = if highlighted {
        2.0
    } else {
        1.0 + pose.glow / 40.0
    };
    let face_fill = if highlighted {
        rgba(0.98, 0.99, 1.0, pose.alpha / 255.0)
    } else {
        rgba(1.0, 1.0, 1.0, pose.alpha / 255.0)
    };
    local
        .polygon()
        .color(face_fill)
        .stroke(accent(border_alpha(pose, highlighted) / 255.0))
        .stroke_weight(stroke_weight)
        .points(face.clone());

    if let Some(texture) = texture {
        local.texture(texture).w_h(pose.size, pose.size);

        // textures carry no tint, so fading and brightening are overlays
        let fade = 1.0 - pose.alpha / 255.0;
        if fade > 0.0 {
            let bg = base_color();
            local
                .polygon()
                .color(rgba(bg.red, bg.green, bg.blue, fade))
                .points(face.clone());
        }
        if pose.glow > HALO_GLOW_MIN {
            local
                .polygon()
                .color(rgba(1.0, 1.0, 1.0, 0.1 * pose.alpha / 255.0))
                .points(face);
        }
    }
}
