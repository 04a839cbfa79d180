//! Data-driven battle content and loaders.
//!
//! This crate houses the static content an encounter is built from and
//! provides loaders for RON/TOML data files:
//! - Move catalogs (data-driven via RON)
//! - Species catalogs with learnsets (data-driven via RON)
//! - Battle pacing and damage tuning (data-driven via TOML)
//!
//! All loaders use battle-core types directly with serde for deserialization.
//! The bundled data set lives in `data/` next to this crate's manifest.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LearnableMove, MoveCatalog, MoveLoader, SpeciesCatalog,
    SpeciesEntry, SpeciesLoader,
};

/// Directory holding the data files shipped with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
