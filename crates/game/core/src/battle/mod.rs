//! Synchronous building blocks of the battle flow.
//!
//! The async sequencing lives in `battle-runtime`; this module only holds what
//! can be decided without awaiting anything: which state the battle is in,
//! how input moves the cursors, and what to say about a damage outcome.

pub mod narration;
mod selection;
mod state;
mod unit;

pub use selection::{BattleAction, Direction, InputEvent, SelectionState};
pub use state::{BattleOutcome, BattleState, Side};
pub use unit::Unit;
