//! Serialization for map documents.
//!
//! Implements save/load for `.agvmap` files: a JSON document holding the
//! whole map tree with business-only node/line snapshots, plus metadata.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::MapItem;

/// Map document format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete map document structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub maps: Vec<MapItem>,
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl MapDocument {
    /// Create a new empty document with default metadata
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DocumentMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            maps: Vec::new(),
        }
    }

    /// Create a document from a map tree
    pub fn from_maps(name: impl Into<String>, maps: Vec<MapItem>) -> Self {
        let mut doc = Self::new(name);
        doc.maps = maps;
        doc
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize document")?;

        std::fs::write(path.as_ref(), json).context("Failed to write map document")?;

        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read map document")?;

        let mut document: MapDocument =
            serde_json::from_str(&content).context("Failed to parse map document")?;

        // Update modified timestamp
        document.metadata.modified = Utc::now();

        Ok(document)
    }
}
