//! Terminal implementation of the battle's presentation surface.
//!
//! Every effect mutates the [`BattleView`] and redraws immediately. Timed
//! effects sleep on the tokio timer between frames so the battle worker stays
//! suspended until they finish.
use std::time::Duration;

use async_trait::async_trait;
use battle_core::{Creature, Move, Side};
use battle_runtime::{HpView, Presentation};
use tokio::time::sleep;
use tracing::warn;

use crate::terminal::Tui;
use crate::ui;
use crate::view::{BattleView, HudView, Pose, hp_steps};

const ANIMATION_FRAME: Duration = Duration::from_millis(120);
const HP_STEP: Duration = Duration::from_millis(25);
const HP_MAX_STEPS: u32 = 20;

pub struct TerminalPresentation {
    tui: Tui,
    view: BattleView,
    typing_delay: Duration,
}

impl TerminalPresentation {
    pub fn new(tui: Tui, typing_delay: Duration) -> Self {
        Self {
            tui,
            view: BattleView::new(),
            typing_delay,
        }
    }

    fn redraw(&mut self) {
        if let Err(err) = self.tui.draw(|frame| ui::render(frame, &self.view)) {
            warn!("Failed to draw battle screen: {}", err);
        }
    }

    async fn hold(&mut self, side: Side, pose: Pose, duration: Duration) {
        self.view.set_pose(side, pose);
        self.redraw();
        sleep(duration).await;
    }
}

#[async_trait]
impl Presentation for TerminalPresentation {
    fn bind_unit(&mut self, side: Side, creature: &Creature) {
        self.view.set_pose(side, Pose::Idle);
        self.view.hud_mut(side).name = creature.name().to_owned();
        self.redraw();
    }

    fn set_hud_data(&mut self, side: Side, creature: &Creature) {
        *self.view.hud_mut(side) = HudView::of(creature);
        self.redraw();
    }

    fn set_move_names(&mut self, moves: &[Move]) {
        self.view.moves.clear();
        for (index, mv) in moves.iter().enumerate() {
            self.view.set_move(index, mv);
        }
    }

    async fn type_dialog(&mut self, text: &str) {
        self.view.dialog.clear();
        for ch in text.chars() {
            self.view.dialog.push(ch);
            self.redraw();
            if !self.typing_delay.is_zero() {
                sleep(self.typing_delay).await;
            }
        }
    }

    async fn play_attack_animation(&mut self, side: Side) {
        self.hold(side, Pose::Attacking, ANIMATION_FRAME * 2).await;
        self.view.set_pose(side, Pose::Idle);
        self.redraw();
    }

    async fn play_hit_animation(&mut self, side: Side) {
        for _ in 0..3 {
            self.hold(side, Pose::Hit, ANIMATION_FRAME).await;
            self.hold(side, Pose::Idle, ANIMATION_FRAME).await;
        }
    }

    async fn play_faint_animation(&mut self, side: Side) {
        self.hold(side, Pose::Fainted, ANIMATION_FRAME * 3).await;
    }

    async fn update_hp(&mut self, side: Side, hp: HpView) {
        let from = self.view.hud(side).hp;
        self.view.hud_mut(side).max_hp = hp.maximum;

        for value in hp_steps(from, hp.current, HP_MAX_STEPS) {
            self.view.hud_mut(side).hp = value;
            self.redraw();
            sleep(HP_STEP).await;
        }
    }

    async fn wait(&mut self, duration: Duration) {
        sleep(duration).await;
    }

    fn enable_action_selector(&mut self, enabled: bool) {
        self.view.action_selector = enabled;
        self.redraw();
    }

    fn enable_move_selector(&mut self, enabled: bool) {
        self.view.move_selector = enabled;
        self.redraw();
    }

    fn enable_dialog_text(&mut self, enabled: bool) {
        self.view.dialog_visible = enabled;
        self.redraw();
    }

    fn update_action_selection(&mut self, index: usize) {
        self.view.action_index = index;
        self.redraw();
    }

    fn update_move_selection(&mut self, index: usize, mv: &Move) {
        self.view.move_index = index;
        self.view.set_move(index, mv);
        self.redraw();
    }
}
