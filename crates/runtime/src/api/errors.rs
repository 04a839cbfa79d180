//! Unified error types surfaced by the runtime API.
//!
//! Battle rule violations (bad selections, input while busy) are never errors;
//! these variants cover assembly mistakes and worker coordination failures.
use battle_core::Side;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} creature not set")]
    CreatureNotSet { side: Side },

    #[error("presentation surface not set")]
    PresentationNotSet,

    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle ended without reporting an outcome")]
    OutcomeDropped(#[source] oneshot::error::RecvError),

    #[error("battle outcome was already taken")]
    OutcomeTaken,

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
