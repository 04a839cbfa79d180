//! Battle orchestrator.
//!
//! [`Battle`] owns both units and the selection cursors, and drives the turn
//! state machine. Every presentation effect is awaited in order before the
//! next step runs; the only entry point while a battle is live is
//! [`Battle::handle_input`], which is a no-op outside the selection states.

use tokio::sync::{oneshot, watch};
use tracing::{debug, info, trace, warn};

use battle_core::{
    BattleAction, BattleConfig, BattleOutcome, BattleState, Creature, DamageOutcome,
    DamageResolver, InputEvent, Move, SelectionState, Side, Unit, narration,
};

use crate::api::{
    EnemyMovePolicy, HpView, Presentation, Result, RuntimeError, UniformRandomPolicy,
};
use crate::resolver::RandomizedResolver;

/// What became of a single input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDisposition {
    /// Refused: wrong state, out-of-range index or an unavailable action.
    Ignored,
    /// Moved a cursor or opened a menu.
    Applied,
    /// Started a move sequence that ran to its end (hand-off or faint).
    Resolved,
}

/// State as seen from outside the battle.
///
/// `turn` counts the move sequences started so far. Input accepted under an
/// earlier turn is stale once a sequence has begun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleStatus {
    pub state: BattleState,
    pub turn: u64,
}

/// One encounter between the player's unit and an opponent.
pub struct Battle {
    state: BattleState,
    turn: u64,
    selection: SelectionState,
    player: Unit,
    enemy: Unit,
    config: BattleConfig,
    presentation: Box<dyn Presentation>,
    resolver: Box<dyn DamageResolver>,
    enemy_policy: Box<dyn EnemyMovePolicy>,
    state_tx: watch::Sender<BattleStatus>,
    outcome_tx: Option<oneshot::Sender<BattleOutcome>>,
}

impl Battle {
    /// Create a new battle builder
    pub fn builder() -> BattleBuilder {
        BattleBuilder::new()
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Number of move sequences started so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn player(&self) -> &Unit {
        &self.player
    }

    pub fn enemy(&self) -> &Unit {
        &self.enemy
    }

    pub fn unit(&self, side: Side) -> &Unit {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Receiver that observes every state transition.
    pub fn subscribe_state(&self) -> watch::Receiver<BattleStatus> {
        self.state_tx.subscribe()
    }

    /// Runs the setup sequence and opens the action menu.
    ///
    /// Only the first call does anything.
    pub async fn start(&mut self) {
        if self.state != BattleState::Start {
            debug!(
                target: "battle::orchestrator",
                state = %self.state,
                "Battle already started"
            );
            return;
        }

        debug!(
            target: "battle::orchestrator",
            player = self.player.name(),
            enemy = self.enemy.name(),
            "Setting up battle"
        );

        for unit in [&self.player, &self.enemy] {
            self.presentation.bind_unit(unit.side(), unit.creature());
        }
        for unit in [&self.player, &self.enemy] {
            self.presentation.set_hud_data(unit.side(), unit.creature());
        }
        self.presentation.set_move_names(self.player.creature().moves());

        let arrival = narration::appeared(self.enemy.name());
        self.presentation.type_dialog(&arrival).await;

        self.enter_player_action().await;
    }

    /// Feeds one polled input event to the selection controller.
    pub async fn handle_input(&mut self, input: InputEvent) -> InputDisposition {
        match self.state {
            BattleState::PlayerAction => self.handle_action_selection(input),
            BattleState::PlayerMove => self.handle_move_selection(input).await,
            state => {
                trace!(
                    target: "battle::orchestrator",
                    %state,
                    ?input,
                    "Input ignored"
                );
                InputDisposition::Ignored
            }
        }
    }

    /// Applies an action menu choice.
    ///
    /// Fight opens the move menu. Run is a placeholder and leaves the battle
    /// untouched.
    pub fn choose_action(&mut self, action: BattleAction) -> InputDisposition {
        if self.state != BattleState::PlayerAction {
            trace!(
                target: "battle::orchestrator",
                state = %self.state,
                ?action,
                "Action ignored"
            );
            return InputDisposition::Ignored;
        }

        match action {
            BattleAction::Fight => {
                self.enter_player_move();
                InputDisposition::Applied
            }
            BattleAction::Run => {
                debug!(target: "battle::orchestrator", "Run is not available");
                InputDisposition::Ignored
            }
        }
    }

    /// Commits the player's move at `index` and runs the turn to its end.
    ///
    /// Returns once the enemy has answered and the action menu is open again,
    /// or once an outcome has been reported.
    pub async fn confirm_move(&mut self, index: usize) -> InputDisposition {
        if self.state != BattleState::PlayerMove {
            trace!(
                target: "battle::orchestrator",
                state = %self.state,
                index,
                "Move confirmation ignored"
            );
            return InputDisposition::Ignored;
        }

        let Some(mv) = self.player.creature_mut().use_move(index) else {
            debug!(
                target: "battle::orchestrator",
                index,
                moves = self.player.creature().moves().len(),
                "Move index out of range"
            );
            return InputDisposition::Ignored;
        };

        self.turn += 1;
        self.set_state(BattleState::Busy);
        self.presentation.enable_move_selector(false);
        self.presentation.enable_dialog_text(true);

        let outcome = self.perform_move(Side::Player, &mv).await;
        if outcome.fainted {
            self.conclude(Side::Enemy).await;
        } else {
            self.perform_enemy_move().await;
        }

        InputDisposition::Resolved
    }

    fn handle_action_selection(&mut self, input: InputEvent) -> InputDisposition {
        match input {
            InputEvent::Direction(direction) => {
                self.selection.move_action_cursor(direction);
                let index = self.selection.action_index();
                self.presentation.update_action_selection(index);
                InputDisposition::Applied
            }
            InputEvent::Confirm => match self.selection.action() {
                Some(action) => self.choose_action(action),
                None => InputDisposition::Ignored,
            },
        }
    }

    async fn handle_move_selection(&mut self, input: InputEvent) -> InputDisposition {
        match input {
            InputEvent::Direction(direction) => {
                let moves = self.player.creature().moves();
                self.selection.move_move_cursor(direction, moves.len());

                let index = self.selection.move_index();
                if let Some(mv) = moves.get(index) {
                    self.presentation.update_move_selection(index, mv);
                }
                InputDisposition::Applied
            }
            InputEvent::Confirm => self.confirm_move(self.selection.move_index()).await,
        }
    }

    async fn enter_player_action(&mut self) {
        self.presentation.type_dialog(narration::CHOOSE_ACTION).await;
        self.set_state(BattleState::PlayerAction);
        self.presentation.enable_action_selector(true);
        self.presentation.update_action_selection(self.selection.action_index());
    }

    fn enter_player_move(&mut self) {
        self.set_state(BattleState::PlayerMove);
        self.presentation.enable_action_selector(false);
        self.presentation.enable_dialog_text(false);
        self.presentation.enable_move_selector(true);

        let index = self.selection.move_index();
        if let Some(mv) = self.player.creature().moves().get(index) {
            self.presentation.update_move_selection(index, mv);
        }
    }

    async fn perform_enemy_move(&mut self) {
        self.set_state(BattleState::EnemyMove);

        let moves = self.enemy.creature().moves();
        let mut index = self.enemy_policy.choose_move(moves);
        if index >= moves.len() {
            warn!(
                target: "battle::orchestrator",
                index,
                moves = moves.len(),
                "Enemy policy chose an invalid move, using the first one"
            );
            index = 0;
        }

        let Some(mv) = self.enemy.creature_mut().use_move(index) else {
            return;
        };

        let outcome = self.perform_move(Side::Enemy, &mv).await;
        if outcome.fainted {
            self.conclude(Side::Player).await;
        } else {
            self.enter_player_action().await;
        }
    }

    /// Announces, animates and resolves one move use by `side`.
    async fn perform_move(&mut self, side: Side, mv: &Move) -> DamageOutcome {
        let target = side.opponent();

        let announcement = narration::used_move(self.unit(side).name(), mv.name());
        self.presentation.type_dialog(&announcement).await;
        self.presentation.play_attack_animation(side).await;
        self.presentation.wait(self.config.attack_pause()).await;
        self.presentation.play_hit_animation(target).await;

        let (attacker, defender) = match side {
            Side::Player => (&self.player, &mut self.enemy),
            Side::Enemy => (&self.enemy, &mut self.player),
        };
        let outcome = self.resolver.resolve(mv, attacker.creature(), defender.creature_mut());
        let hp = HpView::of(defender.creature());

        debug!(
            target: "battle::orchestrator",
            attacker = %side,
            mv = mv.name(),
            pp = mv.pp(),
            damage = outcome.damage,
            hp = hp.current,
            fainted = outcome.fainted,
            "Move resolved"
        );

        self.presentation.update_hp(target, hp).await;
        for line in narration::outcome_lines(&outcome) {
            self.presentation.type_dialog(line).await;
        }

        outcome
    }

    /// Plays out the faint of `fainted` and reports the outcome.
    async fn conclude(&mut self, fainted: Side) {
        let text = narration::fainted(fainted, self.unit(fainted).name());
        self.presentation.type_dialog(&text).await;
        self.presentation.play_faint_animation(fainted).await;
        self.presentation.wait(self.config.faint_pause()).await;

        let outcome = BattleOutcome::when_fainted(fainted);
        self.set_state(BattleState::Terminated);
        info!(target: "battle::orchestrator", ?outcome, "Battle over");

        match self.outcome_tx.take() {
            Some(tx) => {
                if tx.send(outcome).is_err() {
                    debug!(target: "battle::orchestrator", "Outcome receiver dropped");
                }
            }
            None => warn!(target: "battle::orchestrator", "Outcome already reported"),
        }
    }

    fn set_state(&mut self, state: BattleState) {
        debug!(
            target: "battle::orchestrator",
            from = %self.state,
            to = %state,
            turn = self.turn,
            "State transition"
        );
        self.state = state;
        self.state_tx.send_replace(BattleStatus {
            state,
            turn: self.turn,
        });
    }
}

/// Builder for [`Battle`].
///
/// Both creatures and the presentation surface are required. The resolver
/// defaults to [`RandomizedResolver`] and the enemy policy to
/// [`UniformRandomPolicy`].
pub struct BattleBuilder {
    config: BattleConfig,
    player: Option<Creature>,
    enemy: Option<Creature>,
    presentation: Option<Box<dyn Presentation>>,
    resolver: Option<Box<dyn DamageResolver>>,
    enemy_policy: Option<Box<dyn EnemyMovePolicy>>,
}

impl BattleBuilder {
    fn new() -> Self {
        Self {
            config: BattleConfig::default(),
            player: None,
            enemy: None,
            presentation: None,
            resolver: None,
            enemy_policy: None,
        }
    }

    /// Override battle configuration
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, creature: Creature) -> Self {
        self.player = Some(creature);
        self
    }

    pub fn enemy(mut self, creature: Creature) -> Self {
        self.enemy = Some(creature);
        self
    }

    pub fn presentation(mut self, presentation: impl Presentation + 'static) -> Self {
        self.presentation = Some(Box::new(presentation));
        self
    }

    pub fn resolver(mut self, resolver: impl DamageResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    pub fn enemy_policy(mut self, policy: impl EnemyMovePolicy + 'static) -> Self {
        self.enemy_policy = Some(Box::new(policy));
        self
    }

    /// Build the battle together with the receiver of its single outcome.
    pub fn build(self) -> Result<(Battle, oneshot::Receiver<BattleOutcome>)> {
        let player = self.player.ok_or(RuntimeError::CreatureNotSet { side: Side::Player })?;
        let enemy = self.enemy.ok_or(RuntimeError::CreatureNotSet { side: Side::Enemy })?;
        let presentation = self.presentation.ok_or(RuntimeError::PresentationNotSet)?;

        let damage = self.config.damage;
        let resolver: Box<dyn DamageResolver> = match self.resolver {
            Some(resolver) => resolver,
            None => Box::new(RandomizedResolver::new(damage)),
        };
        let enemy_policy: Box<dyn EnemyMovePolicy> = match self.enemy_policy {
            Some(policy) => policy,
            None => Box::new(UniformRandomPolicy::new()),
        };

        let (state_tx, _state_rx) = watch::channel(BattleStatus {
            state: BattleState::Start,
            turn: 0,
        });
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let battle = Battle {
            state: BattleState::Start,
            turn: 0,
            selection: SelectionState::new(),
            player: Unit::new(Side::Player, player),
            enemy: Unit::new(Side::Enemy, enemy),
            config: self.config,
            presentation,
            resolver,
            enemy_policy,
            state_tx,
            outcome_tx: Some(outcome_tx),
        };

        Ok((battle, outcome_rx))
    }
}
