use crate::actions::{Action, DebugConsoleAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Appends are what logging produces; logging them would loop forever
    fn should_log(action: &Action) -> bool {
        !matches!(
            action,
            Action::DebugConsole(DebugConsoleAction::Append(_)) | Action::None
        )
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if Self::should_log(action) {
            log::debug!("Action: {:?}", action);
        }

        true // Always pass action through
    }
}
