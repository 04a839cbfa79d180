//! Shared fixtures for battle runtime tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use battle_core::{
    BaseStats, BattleConfig, Creature, DamageOutcome, DamageResolver, Element, Move,
    MoveCategory, MoveDefinition, Side, Species,
};
use battle_runtime::{HpView, Presentation};

/// Everything the battle asked the presentation layer to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    BindUnit(Side, String),
    HudData(Side, u32),
    MoveNames(Vec<String>),
    Dialog(String),
    AttackAnimation(Side),
    HitAnimation(Side),
    FaintAnimation(Side),
    Hp(Side, HpView),
    Wait(Duration),
    ActionSelector(bool),
    MoveSelector(bool),
    DialogText(bool),
    ActionSelection(usize),
    MoveSelection(usize, String),
}

/// Shared view of the cues recorded by a [`RecordingPresentation`].
#[derive(Clone, Default)]
pub struct Recorder {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl Recorder {
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn dialog(&self) -> Vec<String> {
        self.cues()
            .into_iter()
            .filter_map(|cue| match cue {
                Cue::Dialog(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&Cue) -> bool) -> usize {
        self.cues().iter().filter(|cue| predicate(cue)).count()
    }

    pub fn clear(&self) {
        self.cues.lock().unwrap().clear();
    }

    fn push(&self, cue: Cue) {
        self.cues.lock().unwrap().push(cue);
    }
}

/// Headless presentation that completes every effect immediately.
///
/// A gated presentation blocks in `wait` until the test adds a permit, which
/// holds the battle in the middle of a move sequence. A slow one blocks the
/// worker thread whenever the action menu is toggled, like a terminal redraw.
pub struct RecordingPresentation {
    recorder: Recorder,
    gate: Option<Arc<Semaphore>>,
    redraw: Duration,
}

impl RecordingPresentation {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            gate: None,
            redraw: Duration::ZERO,
        }
    }

    pub fn gated(recorder: Recorder, gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(recorder)
        }
    }

    pub fn slow(recorder: Recorder, redraw: Duration) -> Self {
        Self {
            redraw,
            ..Self::new(recorder)
        }
    }
}

#[async_trait]
impl Presentation for RecordingPresentation {
    fn bind_unit(&mut self, side: Side, creature: &Creature) {
        self.recorder.push(Cue::BindUnit(side, creature.name().to_owned()));
    }

    fn set_hud_data(&mut self, side: Side, creature: &Creature) {
        self.recorder.push(Cue::HudData(side, creature.hp()));
    }

    fn set_move_names(&mut self, moves: &[Move]) {
        self.recorder.push(Cue::MoveNames(
            moves.iter().map(|mv| mv.name().to_owned()).collect(),
        ));
    }

    async fn type_dialog(&mut self, text: &str) {
        self.recorder.push(Cue::Dialog(text.to_owned()));
    }

    async fn play_attack_animation(&mut self, side: Side) {
        self.recorder.push(Cue::AttackAnimation(side));
    }

    async fn play_hit_animation(&mut self, side: Side) {
        self.recorder.push(Cue::HitAnimation(side));
    }

    async fn play_faint_animation(&mut self, side: Side) {
        self.recorder.push(Cue::FaintAnimation(side));
    }

    async fn update_hp(&mut self, side: Side, hp: HpView) {
        self.recorder.push(Cue::Hp(side, hp));
    }

    async fn wait(&mut self, duration: Duration) {
        self.recorder.push(Cue::Wait(duration));
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }

    fn enable_action_selector(&mut self, enabled: bool) {
        self.recorder.push(Cue::ActionSelector(enabled));
        if !self.redraw.is_zero() {
            std::thread::sleep(self.redraw);
        }
    }

    fn enable_move_selector(&mut self, enabled: bool) {
        self.recorder.push(Cue::MoveSelector(enabled));
    }

    fn enable_dialog_text(&mut self, enabled: bool) {
        self.recorder.push(Cue::DialogText(enabled));
    }

    fn update_action_selection(&mut self, index: usize) {
        self.recorder.push(Cue::ActionSelection(index));
    }

    fn update_move_selection(&mut self, index: usize, mv: &Move) {
        self.recorder.push(Cue::MoveSelection(index, mv.name().to_owned()));
    }
}

/// One scripted hit.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub damage: u32,
    pub critical: f32,
    pub effectiveness: f32,
}

impl Hit {
    pub fn plain(damage: u32) -> Self {
        Self {
            damage,
            critical: 1.0,
            effectiveness: 1.0,
        }
    }

    pub fn with(damage: u32, critical: f32, effectiveness: f32) -> Self {
        Self {
            damage,
            critical,
            effectiveness,
        }
    }
}

/// Resolver that plays back a fixed list of hits, then deals 1 damage.
#[derive(Default)]
pub struct ScriptedResolver {
    hits: VecDeque<Hit>,
}

impl ScriptedResolver {
    pub fn new(hits: impl IntoIterator<Item = Hit>) -> Self {
        Self {
            hits: hits.into_iter().collect(),
        }
    }
}

impl DamageResolver for ScriptedResolver {
    fn resolve(
        &mut self,
        _mv: &Move,
        _attacker: &Creature,
        defender: &mut Creature,
    ) -> DamageOutcome {
        let hit = self.hits.pop_front().unwrap_or(Hit::plain(1));
        let fainted = defender.take_damage(hit.damage);

        DamageOutcome {
            fainted,
            critical: hit.critical,
            type_effectiveness: hit.effectiveness,
            damage: hit.damage,
        }
    }
}

/// Battle config without dramatic pauses.
pub fn instant_config() -> BattleConfig {
    BattleConfig {
        attack_pause_ms: 0,
        faint_pause_ms: 0,
        ..BattleConfig::default()
    }
}

fn physical(name: &str, element: Element, power: u32, pp: u32) -> MoveDefinition {
    MoveDefinition::new(name, element, MoveCategory::Physical, power, 100, pp)
}

/// Level 5 grass creature with three moves.
pub fn sproutle() -> Creature {
    let species = Species::new(
        "Sproutle",
        Element::Grass,
        Some(Element::Poison),
        BaseStats::new(45, 49, 49, 65, 65, 45),
    );
    Creature::new(
        species,
        5,
        [
            physical("Tackle", Element::Normal, 40, 35),
            physical("Vine Whip", Element::Grass, 45, 25),
            physical("Razor Leaf", Element::Grass, 55, 25),
        ],
    )
    .unwrap()
}

/// Level 5 fire creature with two moves.
pub fn pyrokit() -> Creature {
    let species = Species::new(
        "Pyrokit",
        Element::Fire,
        None,
        BaseStats::new(39, 52, 43, 60, 50, 65),
    );
    Creature::new(
        species,
        5,
        [
            physical("Scratch", Element::Normal, 40, 35),
            physical("Ember", Element::Fire, 40, 25),
        ],
    )
    .unwrap()
}
