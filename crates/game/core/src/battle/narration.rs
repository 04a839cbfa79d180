//! Dialog lines spoken by the battle.

use arrayvec::ArrayVec;

use crate::combat::{DamageOutcome, Effectiveness};

use super::state::Side;

pub const CHOOSE_ACTION: &str = "Choose an action";
pub const CRITICAL_HIT: &str = "A critical hit!";
pub const SUPER_EFFECTIVE: &str = "That's super effective!";
pub const NOT_VERY_EFFECTIVE: &str = "That was not very effective..";

/// Lines describing notable parts of a damage outcome, in display order.
pub fn outcome_lines(outcome: &DamageOutcome) -> ArrayVec<&'static str, 2> {
    let mut lines = ArrayVec::new();

    if outcome.is_critical() {
        lines.push(CRITICAL_HIT);
    }

    match outcome.effectiveness() {
        Effectiveness::Super => lines.push(SUPER_EFFECTIVE),
        Effectiveness::NotVery => lines.push(NOT_VERY_EFFECTIVE),
        Effectiveness::Neutral => {}
    }

    lines
}

pub fn appeared(enemy: &str) -> String {
    format!("A wild {enemy} appeared.")
}

pub fn used_move(attacker: &str, mv: &str) -> String {
    format!("{attacker} used {mv}")
}

pub fn fainted(side: Side, name: &str) -> String {
    match side {
        Side::Enemy => format!("The {name} enemy fainted"),
        Side::Player => format!("Your {name} fainted"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(critical: f32, type_effectiveness: f32) -> DamageOutcome {
        DamageOutcome {
            fainted: false,
            critical,
            type_effectiveness,
            damage: 10,
        }
    }

    #[test]
    fn plain_hits_say_nothing() {
        assert!(outcome_lines(&outcome(1.0, 1.0)).is_empty());
    }

    #[test]
    fn not_very_effective_without_critical() {
        assert_eq!(
            outcome_lines(&outcome(1.0, 0.5)).as_slice(),
            &[NOT_VERY_EFFECTIVE]
        );
    }

    #[test]
    fn critical_comes_before_effectiveness() {
        assert_eq!(
            outcome_lines(&outcome(2.0, 2.0)).as_slice(),
            &[CRITICAL_HIT, SUPER_EFFECTIVE]
        );
        assert_eq!(outcome_lines(&outcome(2.0, 1.0)).as_slice(), &[CRITICAL_HIT]);
    }

    #[test]
    fn faint_lines_name_the_side() {
        assert_eq!(fainted(Side::Enemy, "Pyrokit"), "The Pyrokit enemy fainted");
        assert_eq!(fainted(Side::Player, "Sproutle"), "Your Sproutle fainted");
        assert_eq!(appeared("Pyrokit"), "A wild Pyrokit appeared.");
        assert_eq!(used_move("Sproutle", "Tackle"), "Sproutle used Tackle");
    }
}
