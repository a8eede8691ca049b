// src/error.rs
//
// Error type shared by config loading, the service catalog and OSC setup

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid service catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("service catalog must hold between 1 and {max} entries, found {found}")]
    CatalogSize { found: usize, max: usize },

    #[error("failed to bind OSC receiver on port {port}: {reason}")]
    OscBind { port: u16, reason: String },
}

impl DeckError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeckError::Io {
            path: path.into(),
            source,
        }
    }
}
