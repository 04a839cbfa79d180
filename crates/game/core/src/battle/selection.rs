//! Selection controller: cursor movement over the action and move menus.

use crate::config::BattleConfig;

/// Directional input signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Input signals consumed by the battle, polled once per host tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Direction(Direction),
    Confirm,
}

/// Entries of the action menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum BattleAction {
    Fight,
    /// Forfeit hook. Choosing it currently does nothing.
    Run,
}

impl BattleAction {
    pub const COUNT: usize = 2;

    /// Maps a menu index to an action; indices outside the menu yield `None`.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Fight),
            1 => Some(Self::Run),
            _ => None,
        }
    }
}

/// Cursor positions over the action menu and the move grid.
///
/// The move cursor is not reset between turns; it stays on the last move the
/// player confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    action_index: usize,
    move_index: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_index(&self) -> usize {
        self.action_index
    }

    pub fn move_index(&self) -> usize {
        self.move_index
    }

    pub fn action(&self) -> Option<BattleAction> {
        BattleAction::from_index(self.action_index)
    }

    /// Moves the action cursor. Only up/down are meaningful; the cursor stops
    /// at either end of the menu.
    pub fn move_action_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Down if self.action_index + 1 < BattleAction::COUNT => {
                self.action_index += 1;
            }
            Direction::Up if self.action_index > 0 => {
                self.action_index -= 1;
            }
            _ => {}
        }
    }

    /// Moves the cursor over a two-column move grid. A step that would leave
    /// `[0, move_count)` is rejected and the cursor stays put.
    pub fn move_move_cursor(&mut self, direction: Direction, move_count: usize) {
        let columns = BattleConfig::MOVE_GRID_COLUMNS;
        let target = match direction {
            Direction::Left => self.move_index.checked_sub(1),
            Direction::Right => Some(self.move_index + 1),
            Direction::Up => self.move_index.checked_sub(columns),
            Direction::Down => Some(self.move_index + columns),
        };

        if let Some(target) = target.filter(|&index| index < move_count) {
            self.move_index = target;
        }
    }
}
