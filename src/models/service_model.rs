// src/models/service_model.rs
// the JSON-based service catalog shown alongside the deck

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::DeckError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceCatalog {
    pub services: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    /// One card per service; more than this no longer fits the grid layout.
    pub const MAX_ENTRIES: usize = 16;

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DeckError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, DeckError> {
        let catalog: ServiceCatalog = serde_json::from_str(content)?;
        catalog.validate()
    }

    fn validate(self) -> Result<Self, DeckError> {
        let found = self.services.len();
        if found == 0 || found > Self::MAX_ENTRIES {
            return Err(DeckError::CatalogSize {
                found,
                max: Self::MAX_ENTRIES,
            });
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ServiceEntry> {
        self.services.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.services.iter()
    }
}
