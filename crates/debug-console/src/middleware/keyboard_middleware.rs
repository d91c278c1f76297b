//! KeyboardMiddleware - translates keyboard events into console actions
//!
//! Keys that always work:
//! - `Ctrl+C`: quit
//! - `` ` ``: toggle the console
//! - `c`: clear the console (also while hidden)
//!
//! While the console is visible, `Esc`/`q` close it (hide, never destroy)
//! and `j`/`k`/arrows/`gg`/`G` scroll. While hidden, `Esc`/`q` quit.

use crate::actions::{Action, DebugConsoleAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// How long the first `g` of `gg` waits for the second one
const SEQUENCE_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
pub struct KeyboardMiddleware {
    /// Time of a pending `g`, waiting for the second key of `gg`
    pending_g: Option<Instant>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    fn console(action: DebugConsoleAction) -> Option<Action> {
        Some(Action::DebugConsole(action))
    }

    /// Translate a key into an action for the current state
    fn translate(&mut self, key: KeyEvent, state: &AppState) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        let pending_g = self
            .pending_g
            .take()
            .is_some_and(|since| since.elapsed() < SEQUENCE_TIMEOUT);

        match key.code {
            KeyCode::Char('`') => Self::console(DebugConsoleAction::Toggle),
            KeyCode::Char('c') => Self::console(DebugConsoleAction::Clear),
            _ if !state.debug_console.visible => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
                _ => None,
            },
            KeyCode::Esc | KeyCode::Char('q') => Self::console(DebugConsoleAction::RequestClose),
            KeyCode::Char('j') | KeyCode::Down => Self::console(DebugConsoleAction::NavigateNext),
            KeyCode::Char('k') | KeyCode::Up => {
                Self::console(DebugConsoleAction::NavigatePrevious)
            }
            KeyCode::Char('G') | KeyCode::End => {
                Self::console(DebugConsoleAction::NavigateToBottom)
            }
            KeyCode::Home => Self::console(DebugConsoleAction::NavigateToTop),
            KeyCode::Char('g') if pending_g => Self::console(DebugConsoleAction::NavigateToTop),
            KeyCode::Char('g') => {
                self.pending_g = Some(Instant::now());
                None
            }
            _ => None,
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        if let Some(translated) = self.translate(*key, state) {
            log::debug!("Key {:?} -> {:?}", key.code, translated);
            dispatcher.dispatch(translated);
        }

        // Raw key presses never reach the reducer
        false
    }
}
