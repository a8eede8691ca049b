// src/lib.rs

pub mod animation;
pub mod config;
pub mod controllers;
pub mod effects;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod utilities;
pub mod views;

pub use error::DeckError;
