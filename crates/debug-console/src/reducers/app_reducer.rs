use crate::actions::{Action, GlobalAction};
use crate::reducers::debug_console_reducer::reduce_debug_console;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::DebugConsole(console_action) => {
            state.debug_console = reduce_debug_console(state.debug_console, console_action);
        }
        // Key presses are translated by middleware before they get here
        Action::Global(GlobalAction::KeyPressed(_)) | Action::None => {}
    }

    state
}
