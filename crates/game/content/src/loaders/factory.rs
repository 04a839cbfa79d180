//! Content factory for building creatures from data files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, Creature, MoveDefinition};

use crate::loaders::{ConfigLoader, LoadResult, MoveLoader, SpeciesEntry, SpeciesLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── moves.ron
/// └── species.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    moves: HashMap<String, MoveDefinition>,
    species: HashMap<String, SpeciesEntry>,
}

impl ContentFactory {
    /// Loads the move and species catalogs from `data_dir`.
    pub fn load(data_dir: impl Into<PathBuf>) -> LoadResult<Self> {
        let data_dir = data_dir.into();

        let moves = MoveLoader::load(&data_dir.join("moves.ron"))?
            .into_iter()
            .map(|definition| (definition.name.clone(), definition))
            .collect();
        let species = SpeciesLoader::load(&data_dir.join("species.ron"))?
            .into_iter()
            .map(|entry| (entry.species.name.clone(), entry))
            .collect();

        Ok(Self {
            data_dir,
            moves,
            species,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load battle configuration from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("battle.toml"))
    }

    /// Builds a creature of species `name` at `level`.
    ///
    /// The move list holds the first learnset entries whose level is at or
    /// below the creature's level, up to the move capacity.
    pub fn creature(&self, name: &str, level: u32) -> LoadResult<Creature> {
        let entry = self
            .species
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown species: {}", name))?;

        let mut moves = Vec::with_capacity(BattleConfig::MAX_MOVES);
        for learnable in entry.learnset.iter().filter(|l| l.level <= level) {
            let definition = self.moves.get(&learnable.move_name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Species {} learns unknown move: {}",
                    name,
                    learnable.move_name
                )
            })?;
            moves.push(definition.clone());

            if moves.len() >= BattleConfig::MAX_MOVES {
                break;
            }
        }

        Ok(Creature::new(entry.species.clone(), level, moves)?)
    }
}
