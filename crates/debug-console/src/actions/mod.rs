//! Actions module
//!
//! Actions are tagged by scope:
//! - `Global`: application-wide actions (key input, quit)
//! - `DebugConsole`: actions targeted at the debug console state

pub mod debug_console;
pub mod global;

pub use debug_console::DebugConsoleAction;
pub use global::GlobalAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Debug Console actions
    DebugConsole(DebugConsoleAction),
    /// No-op action
    None,
}

impl Action {
    /// Shorthand for appending one message to the console
    pub fn append(text: impl Into<String>) -> Action {
        Action::DebugConsole(DebugConsoleAction::Append(text.into()))
    }
}
