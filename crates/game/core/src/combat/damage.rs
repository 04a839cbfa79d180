//! Damage calculation and application.

use crate::config::DamageParams;
use crate::creature::{Creature, Move, MoveCategory};

use super::element::type_multiplier;
use super::outcome::DamageOutcome;

/// Random inputs for one hit, rolled by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRolls {
    pub critical: bool,
    /// Spread factor in `[random_factor_min, 1.0]`.
    pub random_factor: f32,
}

impl DamageRolls {
    /// Non-critical hit at full spread.
    pub const MAX: Self = Self {
        critical: false,
        random_factor: 1.0,
    };
}

/// Calculate damage for `mv` used by `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// critical  = crit_multiplier if rolled else 1.0
/// type      = chart(move, primary) * chart(move, secondary)
/// modifiers = random_factor * type * critical
/// a         = (2 * attacker.level + 10) / 250
/// d         = a * power * (attack / defense) + 2
/// damage    = max(floor(d * modifiers), minimum)
/// ```
///
/// Physical moves read attack/defense, special moves read the special pair.
/// The returned `fainted` flag predicts whether applying the damage would
/// faint the defender; nothing is mutated.
pub fn calculate_damage(
    mv: &Move,
    attacker: &Creature,
    defender: &Creature,
    rolls: DamageRolls,
    params: &DamageParams,
) -> DamageOutcome {
    let definition = mv.definition();

    let critical = if rolls.critical {
        params.critical_multiplier
    } else {
        1.0
    };
    let (primary, secondary) = defender.elements();
    let type_effectiveness = type_multiplier(definition.element, primary, secondary);
    let modifiers = rolls.random_factor * type_effectiveness * critical;

    let (attack, defense) = match definition.category {
        MoveCategory::Physical => (attacker.attack(), defender.defense()),
        MoveCategory::Special => (attacker.sp_attack(), defender.sp_defense()),
    };

    let a = (2.0 * attacker.level() as f32 + 10.0) / 250.0;
    let d = a * definition.power as f32 * (attack as f32 / defense.max(1) as f32) + 2.0;
    let damage = ((d * modifiers).floor() as u32).max(params.minimum_damage);

    DamageOutcome {
        fainted: damage >= defender.hp(),
        critical,
        type_effectiveness,
        damage,
    }
}

/// Calculate damage and apply it to the defender's HP.
pub fn resolve_hit(
    mv: &Move,
    attacker: &Creature,
    defender: &mut Creature,
    rolls: DamageRolls,
    params: &DamageParams,
) -> DamageOutcome {
    let mut outcome = calculate_damage(mv, attacker, defender, rolls, params);
    outcome.fainted = defender.take_damage(outcome.damage);
    outcome
}
