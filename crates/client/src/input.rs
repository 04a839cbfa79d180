//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use battle_core::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the event to the battle.
    Battle(InputEvent),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into battle input.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                KeyAction::Battle(InputEvent::Direction(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
                KeyAction::Battle(InputEvent::Direction(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
                KeyAction::Battle(InputEvent::Direction(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
                KeyAction::Battle(InputEvent::Direction(Direction::Right))
            }

            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Battle(InputEvent::Confirm),

            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}
