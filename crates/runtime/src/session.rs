//! Spawns a battle onto its own worker task.
//!
//! [`BattleSession`] owns the worker and the outcome receiver, and hands out
//! cloneable [`BattleHandle`]s for input.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use battle_core::BattleOutcome;

use crate::api::{BattleHandle, Result, RuntimeError};
use crate::orchestrator::Battle;
use crate::workers::BattleWorker;

/// Runtime configuration for battle sessions.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
        }
    }
}

/// A running battle.
pub struct BattleSession {
    handle: BattleHandle,
    outcome_rx: Option<oneshot::Receiver<BattleOutcome>>,
    worker_handle: JoinHandle<()>,
}

impl BattleSession {
    /// Moves `battle` onto a worker task and starts its setup sequence.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        battle: Battle,
        outcome_rx: oneshot::Receiver<BattleOutcome>,
        config: &RuntimeConfig,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size.max(1));
        let handle = BattleHandle::new(command_tx, battle.subscribe_state());

        let worker = BattleWorker::new(battle, command_rx);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        debug!(
            target: "battle::worker",
            buffer = config.command_buffer_size,
            "Battle worker spawned"
        );

        Self {
            handle,
            outcome_rx: Some(outcome_rx),
            worker_handle,
        }
    }

    /// Get a cloneable handle to this battle
    pub fn handle(&self) -> BattleHandle {
        self.handle.clone()
    }

    /// Waits for the battle's single outcome.
    ///
    /// Cancel safe: dropping the future leaves the outcome in place. After it
    /// has been returned once, later calls fail with
    /// [`RuntimeError::OutcomeTaken`].
    pub async fn outcome(&mut self) -> Result<BattleOutcome> {
        let outcome_rx = self.outcome_rx.as_mut().ok_or(RuntimeError::OutcomeTaken)?;
        let outcome = outcome_rx.await.map_err(RuntimeError::OutcomeDropped)?;
        self.outcome_rx = None;
        Ok(outcome)
    }

    /// Shuts the worker down once every other handle has been dropped.
    pub async fn finish(self) -> Result<()> {
        drop(self.handle);
        drop(self.outcome_rx);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Stops the worker wherever it is, even mid-sequence. No outcome is
    /// reported for an aborted battle.
    pub async fn abort(self) -> Result<()> {
        self.worker_handle.abort();

        match self.worker_handle.await {
            Err(err) if err.is_cancelled() => Ok(()),
            other => other.map_err(RuntimeError::WorkerJoin),
        }
    }
}
