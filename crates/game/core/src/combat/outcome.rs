//! Damage outcome value object and the resolver seam.

use crate::creature::{Creature, Move};

/// Qualitative effectiveness bucket derived from the type multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effectiveness {
    Super,
    Neutral,
    NotVery,
}

/// Result of a single move use, produced fresh by a [`DamageResolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Authoritative faint flag for this turn.
    pub fainted: bool,
    /// Greater than 1.0 exactly when the hit was critical.
    pub critical: f32,
    pub type_effectiveness: f32,
    /// HP removed from the defender.
    pub damage: u32,
}

impl DamageOutcome {
    pub fn is_critical(&self) -> bool {
        self.critical > 1.0
    }

    pub fn effectiveness(&self) -> Effectiveness {
        if self.type_effectiveness > 1.0 {
            Effectiveness::Super
        } else if self.type_effectiveness < 1.0 {
            Effectiveness::NotVery
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Computes and applies the effect of one move use.
///
/// Implementations mutate only the defender's HP. The returned `fainted` flag
/// is trusted by the orchestrator without re-reading HP.
pub trait DamageResolver: Send {
    fn resolve(&mut self, mv: &Move, attacker: &Creature, defender: &mut Creature)
    -> DamageOutcome;
}
