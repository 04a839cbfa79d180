//! Battle worker that owns the authoritative [`Battle`].
//!
//! Receives commands from [`crate::BattleHandle`] and feeds them to the
//! orchestrator one at a time.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use crate::api::BattleSnapshot;
use crate::orchestrator::Battle;
use battle_core::InputEvent;

/// Commands that can be sent to the battle worker
pub enum Command {
    /// A polled input event, stamped with the turn it was accepted under.
    Input { input: InputEvent, turn: u64 },
    /// Query the battle (read-only).
    Snapshot {
        reply: oneshot::Sender<BattleSnapshot>,
    },
}

/// Background task that drives one battle from setup to outcome.
pub struct BattleWorker {
    battle: Battle,
    command_rx: mpsc::Receiver<Command>,
}

impl BattleWorker {
    pub fn new(battle: Battle, command_rx: mpsc::Receiver<Command>) -> Self {
        Self { battle, command_rx }
    }

    /// Main worker loop.
    ///
    /// Runs the setup sequence, then serves commands until every handle is
    /// dropped. Input that queued up behind a move sequence it did not start
    /// is discarded. Once the battle has terminated, input is ignored but
    /// snapshots are still answered.
    pub async fn run(mut self) {
        self.battle.start().await;

        while let Some(command) = self.command_rx.recv().await {
            match command {
                Command::Input { input, turn } if turn < self.battle.turn() => {
                    trace!(
                        target: "battle::worker",
                        ?input,
                        turn,
                        current = self.battle.turn(),
                        "Discarded stale input"
                    );
                }
                Command::Input { input, .. } => {
                    self.battle.handle_input(input).await;
                }
                Command::Snapshot { reply } => self.reply_snapshot(reply),
            }
        }

        debug!(
            target: "battle::worker",
            state = %self.battle.state(),
            "Command channel closed, worker exiting"
        );
    }

    fn reply_snapshot(&self, reply: oneshot::Sender<BattleSnapshot>) {
        if reply.send(BattleSnapshot::of(&self.battle)).is_err() {
            debug!(target: "battle::worker", "Snapshot reply channel closed (caller dropped)");
        }
    }
}
