//! Damage resolver that rolls critical hits and damage spread.

use battle_core::{
    Creature, DamageOutcome, DamageParams, DamageResolver, DamageRolls, Move, resolve_hit,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default [`DamageResolver`]: rolls with a seedable RNG, then applies the
/// core damage formula.
#[derive(Debug, Clone)]
pub struct RandomizedResolver {
    rng: StdRng,
    params: DamageParams,
}

impl RandomizedResolver {
    pub fn new(params: DamageParams) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            params,
        }
    }

    pub fn seeded(params: DamageParams, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            params,
        }
    }

    fn roll(&mut self) -> DamageRolls {
        let critical = self
            .rng
            .gen_bool(f64::from(self.params.critical_chance.clamp(0.0, 1.0)));
        let min = self.params.random_factor_min.clamp(0.0, 1.0);
        let random_factor = self.rng.gen_range(min..=1.0);

        DamageRolls {
            critical,
            random_factor,
        }
    }
}

impl DamageResolver for RandomizedResolver {
    fn resolve(
        &mut self,
        mv: &Move,
        attacker: &Creature,
        defender: &mut Creature,
    ) -> DamageOutcome {
        let rolls = self.roll();
        resolve_hit(mv, attacker, defender, rolls, &self.params)
    }
}
