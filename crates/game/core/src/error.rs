//! Errors raised while assembling battle data.
//!
//! Battle flow itself never fails: invalid selections and re-entrant triggers
//! are refused as no-ops by the orchestrator. Only construction of malformed
//! creatures surfaces an error.

use crate::config::BattleConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreatureError {
    #[error(
        "creature level must be between 1 and {max}",
        max = BattleConfig::MAX_LEVEL
    )]
    InvalidLevel,

    #[error("creature `{species}` has no moves")]
    NoMoves { species: String },

    #[error(
        "creature `{species}` has {count} moves but at most {max} are allowed",
        max = BattleConfig::MAX_MOVES
    )]
    TooManyMoves { species: String, count: usize },
}
