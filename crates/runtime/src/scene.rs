//! Switches the host between free roaming and battle.
//!
//! The controller only flips surfaces and tracks the mode; assembling and
//! running the battle itself stays with the caller.

use tokio::sync::oneshot;
use tracing::{debug, info};

use battle_core::BattleOutcome;

use crate::orchestrator::Battle;
use crate::session::{BattleSession, RuntimeConfig};

/// What the host is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum GameMode {
    #[default]
    FreeRoam,
    Battle,
}

/// The host surfaces toggled on mode changes.
pub trait SceneSurface: Send {
    fn set_battle_view_active(&mut self, active: bool);

    fn set_world_camera_active(&mut self, active: bool);
}

pub struct SceneController<S> {
    mode: GameMode,
    surface: S,
    config: RuntimeConfig,
    last_outcome: Option<BattleOutcome>,
}

impl<S: SceneSurface> SceneController<S> {
    pub fn new(surface: S, config: RuntimeConfig) -> Self {
        Self {
            mode: GameMode::FreeRoam,
            surface,
            config,
            last_outcome: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn last_outcome(&self) -> Option<BattleOutcome> {
        self.last_outcome
    }

    /// Enters battle mode and spawns `battle`.
    ///
    /// Returns `None` without touching the surfaces if a battle is already
    /// running.
    pub fn on_encounter_triggered(
        &mut self,
        battle: Battle,
        outcome_rx: oneshot::Receiver<BattleOutcome>,
    ) -> Option<BattleSession> {
        if self.mode == GameMode::Battle {
            debug!(target: "battle::orchestrator", "Encounter ignored, already in battle");
            return None;
        }

        info!(
            target: "battle::orchestrator",
            player = battle.player().name(),
            enemy = battle.enemy().name(),
            "Encounter triggered"
        );

        self.mode = GameMode::Battle;
        self.surface.set_battle_view_active(true);
        self.surface.set_world_camera_active(false);

        Some(BattleSession::spawn(battle, outcome_rx, &self.config))
    }

    /// Returns to free roaming after a battle reported `outcome`.
    pub fn end_battle(&mut self, outcome: BattleOutcome) {
        if self.mode != GameMode::Battle {
            debug!(target: "battle::orchestrator", ?outcome, "No battle to end");
            return;
        }

        info!(target: "battle::orchestrator", ?outcome, "Returning to free roam");

        self.mode = GameMode::FreeRoam;
        self.last_outcome = Some(outcome);
        self.surface.set_battle_view_active(false);
        self.surface.set_world_camera_active(true);
    }
}
