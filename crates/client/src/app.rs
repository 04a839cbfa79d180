//! Assembles one encounter and runs the input loop.
use anyhow::{Context, Result, bail};
use crossterm::event::{self as term_event, Event as TermEvent};
use std::time::Duration;
use tracing::{debug, info, warn};

use battle_content::ContentFactory;
use battle_core::{BattleConfig, BattleOutcome};
use battle_runtime::{
    Battle, BattleHandle, RandomizedResolver, RuntimeConfig, SceneController, SceneSurface,
    UniformRandomPolicy,
};

use crate::config::ClientConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::TerminalPresentation;
use crate::terminal::BattleScreen;

/// The terminal has no overworld, so mode switches are only logged.
struct TerminalScene;

impl SceneSurface for TerminalScene {
    fn set_battle_view_active(&mut self, active: bool) {
        debug!(active, "Battle view toggled");
    }

    fn set_world_camera_active(&mut self, active: bool) {
        debug!(active, "World camera toggled");
    }
}

enum Exit {
    Finished(BattleOutcome),
    Quit,
}

pub async fn run(config: ClientConfig) -> Result<()> {
    let factory = ContentFactory::load(&config.content_dir).with_context(|| {
        format!(
            "failed to load content from {}",
            config.content_dir.display()
        )
    })?;
    let battle_config = factory.load_config().unwrap_or_else(|err| {
        warn!("Using default battle config: {:#}", err);
        BattleConfig::default()
    });

    let player = factory.creature(&config.player, config.player_level)?;
    let enemy = factory.creature(&config.enemy, config.enemy_level)?;
    info!(
        player = %config.player,
        enemy = %config.enemy,
        seed = ?config.seed,
        "Starting encounter"
    );

    let (tui, screen) = BattleScreen::enter()?;

    let mut builder = Battle::builder()
        .player(player)
        .enemy(enemy)
        .presentation(TerminalPresentation::new(tui, config.typing_delay))
        .config(battle_config.clone());
    if let Some(seed) = config.seed {
        builder = builder
            .resolver(RandomizedResolver::seeded(battle_config.damage, seed))
            .enemy_policy(UniformRandomPolicy::seeded(seed));
    }
    let (battle, outcome_rx) = builder.build()?;

    let mut scene = SceneController::new(TerminalScene, RuntimeConfig::default());
    let Some(mut session) = scene.on_encounter_triggered(battle, outcome_rx) else {
        bail!("an encounter is already running");
    };
    let handle = session.handle();
    let input = InputHandler::new();
    let mut ticker = tokio::time::interval(config.tick);

    let exit = loop {
        tokio::select! {
            outcome = session.outcome() => break Exit::Finished(outcome?),
            _ = ticker.tick() => {
                if forward_pending_keys(&input, &handle).await? {
                    break Exit::Quit;
                }
            }
        }
    };

    drop(handle);
    let message = match exit {
        Exit::Finished(outcome) => {
            scene.end_battle(outcome);
            tokio::time::sleep(Duration::from_millis(500)).await;
            session.finish().await?;
            if outcome.won() {
                "You won the battle."
            } else {
                "You lost the battle."
            }
        }
        Exit::Quit => {
            info!("Quit requested");
            session.abort().await?;
            "Battle abandoned."
        }
    };

    drop(screen);
    println!("{message}");
    Ok(())
}

/// Drains pending terminal events. Returns `true` when the player asked to
/// quit.
async fn forward_pending_keys(input: &InputHandler, handle: &BattleHandle) -> Result<bool> {
    while term_event::poll(Duration::ZERO)? {
        let TermEvent::Key(key) = term_event::read()? else {
            continue;
        };

        match input.handle_key(key) {
            KeyAction::Quit => return Ok(true),
            KeyAction::Battle(event) => {
                handle.send_input(event).await?;
            }
            KeyAction::None => {}
        }
    }
    Ok(false)
}
