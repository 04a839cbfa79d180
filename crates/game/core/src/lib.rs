//! Deterministic battle rules and data types shared across the workspace.
//!
//! `battle-core` defines the canonical model of a single encounter (creatures,
//! moves, the type chart and the damage formula) together with the pieces of
//! the battle flow that need no async machinery: the state enumeration, the
//! selection controller and outcome narration. The orchestrator in
//! `battle-runtime` sequences these pieces and awaits the presentation layer.
pub mod battle;
pub mod combat;
pub mod config;
pub mod creature;
pub mod error;

pub use battle::{
    BattleAction, BattleOutcome, BattleState, Direction, InputEvent, SelectionState, Side, Unit,
    narration,
};
pub use combat::{
    DamageOutcome, DamageResolver, DamageRolls, Effectiveness, Element, calculate_damage,
    resolve_hit, type_multiplier,
};
pub use config::{BattleConfig, DamageParams};
pub use creature::{BaseStats, Creature, Move, MoveCategory, MoveDefinition, Species};
pub use error::CreatureError;
