//! Asynchronous abstraction over the dialog box, HUD bars and unit animations.
//!
//! The orchestrator awaits every `async` method to completion before taking
//! its next step, so an implementation decides how long each effect lasts.
//! Synchronous methods are affordance toggles with no completion signal.
use std::time::Duration;

use async_trait::async_trait;
use battle_core::{Creature, Move, Side};

/// HP values a HUD bar animates towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpView {
    pub current: u32,
    pub maximum: u32,
}

impl HpView {
    pub fn of(creature: &Creature) -> Self {
        Self {
            current: creature.hp(),
            maximum: creature.max_hp(),
        }
    }
}

/// Trait for the narrated/animated layer the battle drives.
///
/// Different implementations can handle:
/// - Terminal rendering with typed dialog
/// - Headless recording for tests
/// - Instant playback for simulations
#[async_trait]
pub trait Presentation: Send {
    /// Binds a side's sprite/handle to its creature.
    fn bind_unit(&mut self, side: Side, creature: &Creature);

    /// Shows name, level and HP on a side's HUD immediately.
    fn set_hud_data(&mut self, side: Side, creature: &Creature);

    /// Fills the move selector with the player's moves.
    fn set_move_names(&mut self, moves: &[Move]);

    /// Reveals `text` progressively; completes once fully shown.
    async fn type_dialog(&mut self, text: &str);

    async fn play_attack_animation(&mut self, side: Side);

    async fn play_hit_animation(&mut self, side: Side);

    async fn play_faint_animation(&mut self, side: Side);

    /// Animates a side's HP bar to `hp`.
    async fn update_hp(&mut self, side: Side, hp: HpView);

    /// Fixed dramatic pause.
    async fn wait(&mut self, duration: Duration);

    fn enable_action_selector(&mut self, enabled: bool);

    fn enable_move_selector(&mut self, enabled: bool);

    fn enable_dialog_text(&mut self, enabled: bool);

    fn update_action_selection(&mut self, index: usize);

    fn update_move_selection(&mut self, index: usize, mv: &Move);
}
