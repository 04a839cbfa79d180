//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the binary needs to assemble an encounter.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub content_dir: PathBuf,
    pub player: String,
    pub player_level: u32,
    pub enemy: String,
    pub enemy_level: u32,
    /// Seeds both the damage rolls and the enemy's move choice.
    pub seed: Option<u64>,
    pub tick: Duration,
    pub typing_delay: Duration,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: battle_content::bundled_data_dir(),
            player: "Sproutle".to_owned(),
            player_level: 5,
            enemy: "Pyrokit".to_owned(),
            enemy_level: 5,
            seed: None,
            tick: Duration::from_millis(16),
            typing_delay: Duration::from_millis(30),
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_CONTENT_DIR` - Directory holding moves, species and battle config
    /// - `BATTLE_PLAYER` / `BATTLE_PLAYER_LEVEL` - Player species and level (default: Sproutle, 5)
    /// - `BATTLE_ENEMY` / `BATTLE_ENEMY_LEVEL` - Opponent species and level (default: Pyrokit, 5)
    /// - `BATTLE_SEED` - Seed for damage rolls and enemy choices (default: entropy)
    /// - `BATTLE_TICK_MS` - Input polling interval (default: 16)
    /// - `BATTLE_TYPING_DELAY_MS` - Delay per dialog character (default: 30)
    /// - `BATTLE_SESSION_ID` - Log session identifier (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Ok(player) = env::var("BATTLE_PLAYER") {
            config.player = player;
        }
        if let Some(level) = read_env::<u32>("BATTLE_PLAYER_LEVEL") {
            config.player_level = level;
        }
        if let Ok(enemy) = env::var("BATTLE_ENEMY") {
            config.enemy = enemy;
        }
        if let Some(level) = read_env::<u32>("BATTLE_ENEMY_LEVEL") {
            config.enemy_level = level;
        }

        config.seed = read_env::<u64>("BATTLE_SEED");

        if let Some(ms) = read_env::<u64>("BATTLE_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_env::<u64>("BATTLE_TYPING_DELAY_MS") {
            config.typing_delay = Duration::from_millis(ms);
        }

        config.session_id = env::var("BATTLE_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
