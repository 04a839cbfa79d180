use core::fmt;

/// Phase of the battle state machine.
///
/// ```text
/// Start -> PlayerAction -> PlayerMove -> Busy -> EnemyMove -> PlayerAction
///                                         |          |
///                                         +----------+--> Terminated
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum BattleState {
    /// Setup has not completed yet.
    #[default]
    Start,
    /// Choosing between Fight and Run.
    PlayerAction,
    /// Choosing one of the player's moves.
    PlayerMove,
    /// Resolving the enemy's turn.
    EnemyMove,
    /// Resolving the player's turn; no input accepted.
    Busy,
    /// An outcome has been reported.
    Terminated,
}

impl BattleState {
    /// Whether the selection controller may act in this state.
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::PlayerAction | Self::PlayerMove)
    }
}

/// One of the two sides of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        };
        write!(f, "{}", label)
    }
}

/// Terminal result reported exactly once per battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    /// The player's side is left standing.
    Victory,
    Defeat,
}

impl BattleOutcome {
    /// Outcome when `side` is the one that fainted.
    pub const fn when_fainted(side: Side) -> Self {
        match side {
            Side::Enemy => Self::Victory,
            Side::Player => Self::Defeat,
        }
    }

    pub const fn won(self) -> bool {
        matches!(self, Self::Victory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selection_states_accept_input() {
        assert!(BattleState::PlayerAction.accepts_input());
        assert!(BattleState::PlayerMove.accepts_input());
        assert!(!BattleState::Start.accepts_input());
        assert!(!BattleState::Busy.accepts_input());
        assert!(!BattleState::EnemyMove.accepts_input());
        assert!(!BattleState::Terminated.accepts_input());
    }

    #[test]
    fn outcome_follows_fainted_side() {
        assert!(BattleOutcome::when_fainted(Side::Enemy).won());
        assert!(!BattleOutcome::when_fainted(Side::Player).won());
        assert_eq!(Side::Player.opponent(), Side::Enemy);
    }
}
