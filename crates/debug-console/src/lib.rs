//! Drop-down debug console for terminal applications
//!
//! The console is a piece of UI state owned by the render thread. Any other
//! thread appends to it through a [`ConsoleHandle`], which marshals each
//! message onto the owner's queue; the owner applies queued actions in
//! [`Store::pump`]. Messages appended while the console is hidden are
//! dropped, closing the console only hides it, and clearing works in
//! either state.

pub mod actions;
pub mod dispatcher;
pub mod handle;
pub mod logger;
pub mod middleware;
pub mod producers;
pub mod reducers;
pub mod sink;
pub mod state;
pub mod store;
pub mod view_models;
pub mod views;

pub use actions::{Action, DebugConsoleAction, GlobalAction};
pub use dispatcher::{DispatchError, Dispatcher};
pub use handle::{ConsoleHandle, Delivery};
pub use sink::{LogSink, WriterSink};
pub use state::{AppState, DebugConsoleState};
pub use store::Store;
