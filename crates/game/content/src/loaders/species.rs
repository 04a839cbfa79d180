//! Species catalog loader.

use std::path::Path;

use battle_core::Species;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A move a species learns once it reaches `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnableMove {
    pub level: u32,
    #[serde(rename = "move")]
    pub move_name: String,
}

/// Species template together with its learnset, in learning order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub species: Species,
    pub learnset: Vec<LearnableMove>,
}

/// Species catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesCatalog {
    pub species: Vec<SpeciesEntry>,
}

/// Loader for species catalogs from RON files.
pub struct SpeciesLoader;

impl SpeciesLoader {
    /// Load species catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SpeciesEntry>> {
        let content = read_file(path)?;
        let catalog: SpeciesCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species catalog RON: {}", e))?;

        Ok(catalog.species)
    }
}
