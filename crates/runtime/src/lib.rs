//! Turn-based battle runtime.
//!
//! This crate drives a one-on-one battle between the player's creature and an
//! opponent: a state machine that sequences narration, animations and damage
//! resolution through an asynchronous [`Presentation`] surface. Hosts either
//! drive a [`Battle`] directly or spawn it onto a worker with
//! [`BattleSession`] and feed input through a [`BattleHandle`].
//!
//! Modules are organized by responsibility:
//! - [`orchestrator`] hosts the battle state machine and its builder
//! - [`api`] exposes the seams hosts implement or call into
//! - [`resolver`] provides the default randomized damage resolver
//! - [`session`] runs a battle on a background worker
//! - [`scene`] switches the host between free roaming and battle
pub mod api;
pub mod orchestrator;
pub mod resolver;
pub mod scene;
pub mod session;

mod workers;

pub use api::{
    BattleHandle, BattleSnapshot, EnemyMovePolicy, FixedMovePolicy, HpView, Presentation, Result,
    RuntimeError, UniformRandomPolicy,
};
pub use orchestrator::{Battle, BattleBuilder, BattleStatus, InputDisposition};
pub use resolver::RandomizedResolver;
pub use scene::{GameMode, SceneController, SceneSurface};
pub use session::{BattleSession, RuntimeConfig};
