//! Stat-bearing combatants, independent of presentation.
//!
//! - [`Species`] is the immutable template (name, elements, base stats)
//! - [`MoveDefinition`] is an immutable attack template
//! - [`Move`] pairs a definition with its remaining uses (PP)
//! - [`Creature`] is a leveled instance with current HP and up to four moves

mod moves;
mod species;

pub use moves::{Move, MoveCategory, MoveDefinition};
pub use species::{BaseStats, Species};

use arrayvec::ArrayVec;

use crate::combat::Element;
use crate::config::BattleConfig;
use crate::error::CreatureError;

/// A leveled combatant taking part in an encounter.
///
/// Invariant: `hp <= max_hp()`, and `hp == 0` exactly when fainted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    species: Species,
    level: u32,
    hp: u32,
    moves: ArrayVec<Move, { BattleConfig::MAX_MOVES }>,
}

impl Creature {
    /// Builds a creature at full health.
    pub fn new(
        species: Species,
        level: u32,
        moves: impl IntoIterator<Item = MoveDefinition>,
    ) -> Result<Self, CreatureError> {
        if !(1..=BattleConfig::MAX_LEVEL).contains(&level) {
            return Err(CreatureError::InvalidLevel);
        }

        let definitions: Vec<MoveDefinition> = moves.into_iter().collect();
        if definitions.is_empty() {
            return Err(CreatureError::NoMoves {
                species: species.name.clone(),
            });
        }
        if definitions.len() > BattleConfig::MAX_MOVES {
            return Err(CreatureError::TooManyMoves {
                species: species.name.clone(),
                count: definitions.len(),
            });
        }

        let moves = definitions.into_iter().map(Move::new).collect();
        let mut creature = Self {
            species,
            level,
            hp: 0,
            moves,
        };
        creature.hp = creature.max_hp();
        Ok(creature)
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn name(&self) -> &str {
        &self.species.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn elements(&self) -> (Element, Option<Element>) {
        (self.species.primary, self.species.secondary)
    }

    pub fn max_hp(&self) -> u32 {
        self.species.base.hp.saturating_mul(self.level) / 100 + 10
    }

    pub fn attack(&self) -> u32 {
        self.scaled(self.species.base.attack)
    }

    pub fn defense(&self) -> u32 {
        self.scaled(self.species.base.defense)
    }

    pub fn sp_attack(&self) -> u32 {
        self.scaled(self.species.base.sp_attack)
    }

    pub fn sp_defense(&self) -> u32 {
        self.scaled(self.species.base.sp_defense)
    }

    pub fn speed(&self) -> u32 {
        self.scaled(self.species.base.speed)
    }

    fn scaled(&self, base: u32) -> u32 {
        base.saturating_mul(self.level) / 100 + 5
    }

    /// Spends one use of the move at `index` and returns a snapshot of it.
    ///
    /// Only the selected move's PP changes. Moves with no uses left can still
    /// be selected; their counter stays at zero.
    pub fn use_move(&mut self, index: usize) -> Option<Move> {
        let mv = self.moves.get_mut(index)?;
        mv.spend();
        Some(mv.clone())
    }

    /// Reduces HP by `amount`, clamped at zero. Returns whether the creature
    /// fainted.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_fainted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species() -> Species {
        Species::new(
            "Sproutle",
            Element::Grass,
            None,
            BaseStats::new(45, 49, 49, 65, 65, 45),
        )
    }

    fn tackle() -> MoveDefinition {
        MoveDefinition::new("Tackle", Element::Normal, MoveCategory::Physical, 40, 100, 35)
    }

    fn vine_whip() -> MoveDefinition {
        MoveDefinition::new("Vine Whip", Element::Grass, MoveCategory::Physical, 45, 100, 25)
    }

    #[test]
    fn starts_at_full_health() {
        let creature = Creature::new(species(), 10, [tackle()]).unwrap();
        assert_eq!(creature.max_hp(), 45 * 10 / 100 + 10);
        assert_eq!(creature.hp(), creature.max_hp());
        assert_eq!(creature.attack(), 49 * 10 / 100 + 5);
        assert!(!creature.is_fainted());
    }

    #[test]
    fn rejects_malformed_move_lists() {
        assert_eq!(
            Creature::new(species(), 5, []),
            Err(CreatureError::NoMoves {
                species: "Sproutle".into()
            })
        );

        let five = vec![tackle(); 5];
        assert_eq!(
            Creature::new(species(), 5, five),
            Err(CreatureError::TooManyMoves {
                species: "Sproutle".into(),
                count: 5
            })
        );

        assert_eq!(
            Creature::new(species(), 0, [tackle()]),
            Err(CreatureError::InvalidLevel)
        );
    }

    #[test]
    fn levels_above_the_cap_are_rejected() {
        let stats = BaseStats::new(100, 100, 100, 100, 100, 100);
        let bulky = Species::new("Bulky", Element::Normal, None, stats);

        assert_eq!(
            Creature::new(bulky.clone(), 50_000_000, [tackle()]),
            Err(CreatureError::InvalidLevel)
        );
        assert_eq!(
            Creature::new(bulky.clone(), BattleConfig::MAX_LEVEL + 1, [tackle()]),
            Err(CreatureError::InvalidLevel)
        );

        let capped = Creature::new(bulky, BattleConfig::MAX_LEVEL, [tackle()]).unwrap();
        assert_eq!(capped.max_hp(), 110);
        assert_eq!(capped.attack(), 105);
    }

    #[test]
    fn huge_base_stats_saturate() {
        let stats = BaseStats::new(u32::MAX, u32::MAX, 1, 1, 1, 1);
        let giant = Species::new("Giant", Element::Normal, None, stats);
        let creature = Creature::new(giant, BattleConfig::MAX_LEVEL, [tackle()]).unwrap();

        assert_eq!(creature.max_hp(), u32::MAX / 100 + 10);
        assert_eq!(creature.attack(), u32::MAX / 100 + 5);
    }

    #[test]
    fn using_a_move_spends_only_that_move() {
        let mut creature = Creature::new(species(), 5, [tackle(), vine_whip()]).unwrap();

        let used = creature.use_move(1).unwrap();
        assert_eq!(used.name(), "Vine Whip");
        assert_eq!(used.pp(), 24);
        assert_eq!(creature.moves()[0].pp(), 35);
        assert_eq!(creature.moves()[1].pp(), 24);

        assert!(creature.use_move(2).is_none());
    }

    #[test]
    fn exhausted_moves_stay_at_zero() {
        let one_use =
            MoveDefinition::new("Spark", Element::Electric, MoveCategory::Special, 20, 100, 1);
        let mut creature = Creature::new(species(), 5, [one_use]).unwrap();

        assert_eq!(creature.use_move(0).unwrap().pp(), 0);
        assert_eq!(creature.use_move(0).unwrap().pp(), 0);
    }

    #[test]
    fn damage_clamps_at_zero_and_reports_faint() {
        let mut creature = Creature::new(species(), 5, [tackle()]).unwrap();
        let hp = creature.hp();

        assert!(!creature.take_damage(hp - 1));
        assert_eq!(creature.hp(), 1);
        assert!(creature.take_damage(50));
        assert_eq!(creature.hp(), 0);
        assert!(creature.is_fainted());
    }
}
