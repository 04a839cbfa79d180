//! Worker task that backs a battle session.
//!
//! The battle worker owns the [`crate::Battle`] and is the only place its
//! state machine is advanced.

mod battle;

pub use battle::{BattleWorker, Command};
