//! Owns the terminal for the lifetime of the battle screen.
//!
//! [`BattleScreen::enter`] switches to raw mode on the alternate screen with
//! the cursor hidden, and hands back the ratatui terminal the presentation
//! draws into. Dropping the returned [`BattleScreen`] puts the terminal back.
//! A panic anywhere, including on the battle worker task, restores it before
//! the panic message is printed.
use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including on early returns.
pub struct BattleScreen(());

impl BattleScreen {
    pub fn enter() -> Result<(Tui, Self)> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        let screen = Self(());

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let tui = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok((tui, screen))
    }
}

impl Drop for BattleScreen {
    fn drop(&mut self) {
        let _ = leave();
    }
}

fn leave() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    terminal::disable_raw_mode()
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        previous(info);
    }));
}
