// src/render/mod.rs
// Drawing of the deck, its panel and indicator onto a nannou Draw

pub mod card_renderer;
pub mod deck_renderer;
pub mod panel_renderer;
pub mod shapes;

pub use deck_renderer::DeckRenderer;
