//! Pluggable opponent move selection.
//!
//! The battle asks an [`EnemyMovePolicy`] for a move index at the start of
//! every enemy turn. Remaining PP is not consulted: an exhausted move can be
//! picked and used again.
use battle_core::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which of the opponent's moves to use this turn.
pub trait EnemyMovePolicy: Send {
    /// Returns an index into `moves`. `moves` is never empty.
    fn choose_move(&mut self, moves: &[Move]) -> usize;
}

/// Picks any move with equal probability.
#[derive(Debug, Clone)]
pub struct UniformRandomPolicy {
    rng: StdRng,
}

impl UniformRandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible policy for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformRandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyMovePolicy for UniformRandomPolicy {
    fn choose_move(&mut self, moves: &[Move]) -> usize {
        self.rng.gen_range(0..moves.len())
    }
}

/// Always picks the same index.
/// Useful for testing or scripted encounters.
#[derive(Debug, Clone, Copy)]
pub struct FixedMovePolicy(pub usize);

impl EnemyMovePolicy for FixedMovePolicy {
    fn choose_move(&mut self, _moves: &[Move]) -> usize {
        self.0
    }
}
