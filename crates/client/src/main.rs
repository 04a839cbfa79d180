//! Terminal battle client.
//!
//! Loads creatures from the content directory, spawns one encounter and
//! drives it from the keyboard.
//!
//! ```bash
//! BATTLE_PLAYER=Aquapup BATTLE_ENEMY=Voltail cargo run -p battle-client
//! ```
mod app;
mod config;
mod input;
mod logging;
mod presentation;
mod terminal;
mod ui;
mod view;

use anyhow::Result;
use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging(config.session_id.as_deref())?;

    app::run(config).await
}
