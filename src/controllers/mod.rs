pub mod content_sync;
pub mod deck_controller;
pub mod osc;

pub use content_sync::ContentSync;
pub use deck_controller::DeckController;
pub use osc::{OscCommand, OscController};
