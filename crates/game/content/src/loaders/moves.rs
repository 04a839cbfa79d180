//! Move catalog loader.

use std::path::Path;

use battle_core::MoveDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Move catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCatalog {
    pub moves: Vec<MoveDefinition>,
}

/// Loader for move catalogs from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load move catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<MoveDefinition>> {
        let content = read_file(path)?;
        let catalog: MoveCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move catalog RON: {}", e))?;

        Ok(catalog.moves)
    }
}
