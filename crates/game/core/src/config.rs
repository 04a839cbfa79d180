use core::time::Duration;

/// Battle pacing and damage tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Dramatic pause between the attack animation and the hit reaction.
    pub attack_pause_ms: u64,
    /// Pause after a faint animation before the outcome is reported.
    pub faint_pause_ms: u64,
    pub damage: DamageParams,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Fixed capacity of a creature's move list (2x2 selector grid).
    pub const MAX_MOVES: usize = 4;
    /// Width of the move selector grid; vertical cursor steps move by this.
    pub const MOVE_GRID_COLUMNS: usize = 2;
    /// Highest creature level. Stat scaling stays well inside `u32` below it.
    pub const MAX_LEVEL: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTACK_PAUSE_MS: u64 = 750;
    pub const DEFAULT_FAINT_PAUSE_MS: u64 = 2000;

    pub fn new() -> Self {
        Self {
            attack_pause_ms: Self::DEFAULT_ATTACK_PAUSE_MS,
            faint_pause_ms: Self::DEFAULT_FAINT_PAUSE_MS,
            damage: DamageParams::default(),
        }
    }

    pub fn attack_pause(&self) -> Duration {
        Duration::from_millis(self.attack_pause_ms)
    }

    pub fn faint_pause(&self) -> Duration {
        Duration::from_millis(self.faint_pause_ms)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Balance parameters consumed by the damage formula.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageParams {
    /// Probability in `[0, 1]` that a hit is critical.
    pub critical_chance: f32,
    pub critical_multiplier: f32,
    /// Lower bound of the random spread; the upper bound is always 1.0.
    pub random_factor_min: f32,
    /// Floor applied after all modifiers. Must stay above zero so every
    /// encounter ends.
    pub minimum_damage: u32,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            critical_chance: 0.0625,
            critical_multiplier: 2.0,
            random_factor_min: 0.85,
            minimum_damage: 1,
        }
    }
}
