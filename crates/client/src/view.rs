//! Render-side state of the battle screen.
//!
//! The presentation mutates a [`BattleView`] and redraws; nothing here knows
//! about the battle state machine.
use battle_core::{Creature, Move, Side};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HudView {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
}

impl HudView {
    pub fn of(creature: &Creature) -> Self {
        Self {
            name: creature.name().to_owned(),
            level: creature.level(),
            hp: creature.hp(),
            max_hp: creature.max_hp(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp.min(self.max_hp)) / f64::from(self.max_hp)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pose {
    #[default]
    Idle,
    Attacking,
    Hit,
    Fainted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSlot {
    pub name: String,
    pub element: String,
    pub pp: u32,
    pub max_pp: u32,
}

impl MoveSlot {
    pub fn of(mv: &Move) -> Self {
        Self {
            name: mv.name().to_owned(),
            element: mv.definition().element.to_string(),
            pp: mv.pp(),
            max_pp: mv.max_pp(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BattleView {
    pub player: HudView,
    pub enemy: HudView,
    pub player_pose: Pose,
    pub enemy_pose: Pose,
    pub dialog: String,
    pub dialog_visible: bool,
    pub action_selector: bool,
    pub action_index: usize,
    pub move_selector: bool,
    pub move_index: usize,
    pub moves: Vec<MoveSlot>,
}

impl BattleView {
    pub fn new() -> Self {
        Self {
            dialog_visible: true,
            ..Self::default()
        }
    }

    pub fn hud(&self, side: Side) -> &HudView {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn hud_mut(&mut self, side: Side) -> &mut HudView {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn pose(&self, side: Side) -> Pose {
        match side {
            Side::Player => self.player_pose,
            Side::Enemy => self.enemy_pose,
        }
    }

    pub fn set_pose(&mut self, side: Side, pose: Pose) {
        match side {
            Side::Player => self.player_pose = pose,
            Side::Enemy => self.enemy_pose = pose,
        }
    }

    /// Refreshes one move slot, growing the list if needed.
    pub fn set_move(&mut self, index: usize, mv: &Move) {
        let slot = MoveSlot::of(mv);
        let len = self.moves.len();
        match self.moves.get_mut(index) {
            Some(existing) => *existing = slot,
            None if index == len => self.moves.push(slot),
            None => {}
        }
    }
}

/// Intermediate HP values for an animated bar, ending at `to`.
///
/// The bar moves in at most `max_steps` roughly even steps.
pub fn hp_steps(from: u32, to: u32, max_steps: u32) -> Vec<u32> {
    if from == to {
        return vec![to];
    }

    let distance = from.abs_diff(to);
    let step = distance.div_ceil(max_steps.max(1)).max(1);

    let mut values = Vec::new();
    let mut current = from;
    while current != to {
        current = if from > to {
            current.saturating_sub(step).max(to)
        } else {
            (current + step).min(to)
        };
        values.push(current);
    }
    values
}
