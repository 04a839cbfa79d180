//! Cloneable façade for feeding input to a running battle.
//!
//! [`BattleHandle`] hides channel plumbing. Input is checked against the
//! published [`BattleStatus`] before it is queued, so events produced while a
//! move sequence plays out are dropped at the door. Queued input carries the
//! turn it was accepted under.
use tokio::sync::{mpsc, oneshot, watch};
use tracing::trace;

use battle_core::{BattleState, Creature, InputEvent, SelectionState};

use super::errors::{Result, RuntimeError};
use crate::orchestrator::{Battle, BattleStatus};
use crate::workers::Command;

/// Point-in-time copy of a battle's observable state.
#[derive(Clone, Debug)]
pub struct BattleSnapshot {
    pub state: BattleState,
    pub selection: SelectionState,
    pub player: Creature,
    pub enemy: Creature,
}

impl BattleSnapshot {
    pub(crate) fn of(battle: &Battle) -> Self {
        Self {
            state: battle.state(),
            selection: battle.selection(),
            player: battle.player().creature().clone(),
            enemy: battle.enemy().creature().clone(),
        }
    }
}

/// Client-facing handle to interact with a battle worker
#[derive(Clone)]
pub struct BattleHandle {
    command_tx: mpsc::Sender<Command>,
    state_rx: watch::Receiver<BattleStatus>,
}

impl BattleHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        state_rx: watch::Receiver<BattleStatus>,
    ) -> Self {
        Self {
            command_tx,
            state_rx,
        }
    }

    /// Latest published state.
    pub fn state(&self) -> BattleState {
        self.state_rx.borrow().state
    }

    /// Receiver notified on every state transition.
    pub fn state_changes(&self) -> watch::Receiver<BattleStatus> {
        self.state_rx.clone()
    }

    /// Queue an input event for the battle.
    ///
    /// Returns `Ok(false)` when the current state does not take input and the
    /// event was dropped.
    pub async fn send_input(&self, input: InputEvent) -> Result<bool> {
        let BattleStatus { state, turn } = *self.state_rx.borrow();
        if !state.accepts_input() {
            trace!(target: "battle::worker", %state, ?input, "Input dropped");
            return Ok(false);
        }

        self.command_tx
            .send(Command::Input { input, turn })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        Ok(true)
    }

    /// Query the battle (read-only snapshot).
    ///
    /// Answered between move sequences, never in the middle of one.
    pub async fn snapshot(&self) -> Result<BattleSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
