//! Battles running on a worker task, driven through handles.

mod common;

use std::sync::Arc;
use std::time::Duration;

use battle_core::{BattleOutcome, BattleState, Direction, InputEvent};
use battle_runtime::{
    Battle, BattleSession, FixedMovePolicy, GameMode, RuntimeConfig, RuntimeError,
    SceneController, SceneSurface,
};
use common::{Cue, Hit, Recorder, RecordingPresentation, ScriptedResolver};
use tokio::sync::{Semaphore, oneshot};

fn battle(
    presentation: RecordingPresentation,
    hits: impl IntoIterator<Item = Hit>,
) -> (Battle, oneshot::Receiver<BattleOutcome>) {
    Battle::builder()
        .player(common::sproutle())
        .enemy(common::pyrokit())
        .presentation(presentation)
        .resolver(ScriptedResolver::new(hits))
        .enemy_policy(FixedMovePolicy(0))
        .config(common::instant_config())
        .build()
        .unwrap()
}

async fn wait_for_state(session: &BattleSession, state: BattleState) {
    session
        .handle()
        .state_changes()
        .wait_for(|status| status.state == state)
        .await
        .unwrap();
}

#[tokio::test]
async fn worker_reports_a_single_outcome() {
    let recorder = Recorder::default();
    let (battle, outcome_rx) = battle(
        RecordingPresentation::new(recorder.clone()),
        [Hit::plain(100)],
    );
    let mut session = BattleSession::spawn(battle, outcome_rx, &RuntimeConfig::default());
    let handle = session.handle();

    wait_for_state(&session, BattleState::PlayerAction).await;
    assert!(handle.send_input(InputEvent::Confirm).await.unwrap());
    assert!(handle.send_input(InputEvent::Confirm).await.unwrap());

    assert_eq!(session.outcome().await.unwrap(), BattleOutcome::Victory);
    assert!(matches!(
        session.outcome().await,
        Err(RuntimeError::OutcomeTaken)
    ));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, BattleState::Terminated);
    assert!(snapshot.enemy.is_fainted());
    assert!(!handle.send_input(InputEvent::Confirm).await.unwrap());

    drop(handle);
    session.finish().await.unwrap();
}

#[tokio::test]
async fn input_during_a_move_sequence_is_dropped() {
    let recorder = Recorder::default();
    let gate = Arc::new(Semaphore::new(0));
    let (battle, outcome_rx) = battle(
        RecordingPresentation::gated(recorder.clone(), gate.clone()),
        [Hit::plain(1), Hit::plain(1)],
    );
    let session = BattleSession::spawn(battle, outcome_rx, &RuntimeConfig::default());
    let handle = session.handle();

    wait_for_state(&session, BattleState::PlayerAction).await;
    handle.send_input(InputEvent::Confirm).await.unwrap();
    handle.send_input(InputEvent::Confirm).await.unwrap();

    wait_for_state(&session, BattleState::Busy).await;
    let accepted = handle
        .send_input(InputEvent::Direction(Direction::Right))
        .await
        .unwrap();
    assert!(!accepted);

    gate.add_permits(2);
    wait_for_state(&session, BattleState::PlayerAction).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.selection.move_index(), 0);
    assert_eq!(snapshot.player.hp(), snapshot.player.max_hp() - 1);
    assert_eq!(snapshot.enemy.hp(), snapshot.enemy.max_hp() - 1);

    drop(handle);
    session.finish().await.unwrap();
}

#[tokio::test]
async fn input_queued_behind_a_move_sequence_is_discarded() {
    let recorder = Recorder::default();
    let (battle, outcome_rx) = battle(RecordingPresentation::new(recorder.clone()), []);
    let session = BattleSession::spawn(battle, outcome_rx, &RuntimeConfig::default());
    let handle = session.handle();

    wait_for_state(&session, BattleState::PlayerAction).await;

    // The single-threaded test runtime queues every send before the worker
    // gets to run.
    for _ in 0..4 {
        assert!(handle.send_input(InputEvent::Confirm).await.unwrap());
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, BattleState::PlayerAction);
    let tackle = &snapshot.player.moves()[0];
    assert_eq!(tackle.pp(), tackle.max_pp() - 1);

    drop(handle);
    session.finish().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn input_accepted_while_the_menu_redraws_is_applied() {
    let recorder = Recorder::default();
    let (battle, outcome_rx) = battle(
        RecordingPresentation::slow(recorder.clone(), Duration::from_millis(100)),
        [],
    );
    let session = BattleSession::spawn(battle, outcome_rx, &RuntimeConfig::default());
    let handle = session.handle();

    wait_for_state(&session, BattleState::PlayerAction).await;
    assert!(handle.send_input(InputEvent::Confirm).await.unwrap());
    assert!(handle.send_input(InputEvent::Confirm).await.unwrap());

    // The worker is still redrawing the reopened action menu.
    handle
        .state_changes()
        .wait_for(|status| status.turn == 1 && status.state == BattleState::PlayerAction)
        .await
        .unwrap();
    let accepted = handle
        .send_input(InputEvent::Direction(Direction::Down))
        .await
        .unwrap();
    assert!(accepted);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, BattleState::PlayerAction);
    assert_eq!(snapshot.selection.action_index(), 1);
    assert_eq!(recorder.count(|cue| *cue == Cue::ActionSelection(1)), 1);

    drop(handle);
    session.finish().await.unwrap();
}

#[derive(Default)]
struct Surface {
    battle_view: bool,
    world_camera: bool,
}

impl SceneSurface for Surface {
    fn set_battle_view_active(&mut self, active: bool) {
        self.battle_view = active;
    }

    fn set_world_camera_active(&mut self, active: bool) {
        self.world_camera = active;
    }
}

#[tokio::test]
async fn scene_switches_views_around_an_encounter() {
    let surface = Surface {
        battle_view: false,
        world_camera: true,
    };
    let mut scene = SceneController::new(surface, RuntimeConfig::default());
    assert_eq!(scene.mode(), GameMode::FreeRoam);

    let recorder = Recorder::default();
    let (battle_a, outcome_a) = battle(
        RecordingPresentation::new(recorder.clone()),
        [Hit::plain(1), Hit::plain(100)],
    );
    let mut session = scene
        .on_encounter_triggered(battle_a, outcome_a)
        .expect("first encounter should start");

    assert_eq!(scene.mode(), GameMode::Battle);
    assert!(scene.surface().battle_view);
    assert!(!scene.surface().world_camera);

    let (battle_b, outcome_b) = battle(RecordingPresentation::new(Recorder::default()), []);
    assert!(scene.on_encounter_triggered(battle_b, outcome_b).is_none());

    let handle = session.handle();
    wait_for_state(&session, BattleState::PlayerAction).await;
    handle.send_input(InputEvent::Confirm).await.unwrap();
    handle.send_input(InputEvent::Confirm).await.unwrap();

    let outcome = session.outcome().await.unwrap();
    assert_eq!(outcome, BattleOutcome::Defeat);
    scene.end_battle(outcome);

    assert_eq!(scene.mode(), GameMode::FreeRoam);
    assert_eq!(scene.last_outcome(), Some(BattleOutcome::Defeat));
    assert!(!scene.surface().battle_view);
    assert!(scene.surface().world_camera);

    drop(handle);
    session.finish().await.unwrap();
}
