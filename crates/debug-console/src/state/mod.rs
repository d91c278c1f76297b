//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod debug_console;

pub use app::AppState;
pub use debug_console::DebugConsoleState;
