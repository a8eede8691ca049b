// src/render/deck_renderer.rs
//
// Composes a full deck frame. Reads the DeckController, never writes to it.

use nannou::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

use super::card_renderer::draw_card;
use super::panel_renderer::{draw_indicator, draw_panel};
use crate::animation::DeckPhase;
use crate::controllers::DeckController;
use crate::effects::AmbientParticles;
use crate::models::ServiceCatalog;
use crate::views::{accent, BackgroundManager};

pub struct DeckRenderer {
    textures: Vec<Option<wgpu::Texture>>,
    background: BackgroundManager,
    particles: AmbientParticles,
}

impl DeckRenderer {
    pub fn new(textures: Vec<Option<wgpu::Texture>>) -> Self {
        Self {
            textures,
            background: BackgroundManager::new(),
            particles: AmbientParticles::new(),
        }
    }

    /// Loads `card1.png`, `card2.png`, ... from `dir`. Cards whose image
    /// cannot be loaded are drawn without one.
    pub fn load_textures(app: &App, dir: &Path, count: usize) -> Vec<Option<wgpu::Texture>> {
        (1..=count)
            .map(|n| {
                let path = dir.join(format!("card{}.png", n));
                match wgpu::Texture::from_path(app, &path) {
                    Ok(texture) => {
                        debug!(path = %path.display(), "card image loaded");
                        Some(texture)
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "card image unavailable");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn update(&mut self, deck: &DeckController) {
        self.background.update(deck.phase(), deck.progress());
    }

    pub fn draw(&self, draw: &Draw, deck: &DeckController, catalog: &ServiceCatalog) {
        let layout = deck.layout();
        self.background.draw(draw, layout);

        let highlighted = (deck.phase() == DeckPhase::Stacked).then(|| deck.focused_index());
        for index in deck.draw_order() {
            let card = &deck.cards()[index];
            let texture = self.textures.get(index).and_then(Option::as_ref);
            draw_card(draw, layout, card, highlighted == Some(index), texture);
        }

        if deck.phase().is_transitioning() {
            let alpha = AmbientParticles::alpha(deck.progress()) / 255.0;
            let particles =
                self.particles
                    .particles(deck.time(), layout.stack_anchor(), layout.scale_factor);
            for particle in particles {
                let p = layout.to_draw_space(particle.position);
                draw.ellipse()
                    .x_y(p.x, p.y)
                    .w_h(particle.diameter, particle.diameter)
                    .color(accent(alpha));
            }
        }

        draw_panel(draw, deck, catalog);
        draw_indicator(draw, deck);
    }
}
