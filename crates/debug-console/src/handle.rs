//! Console handle - the debug console as a thread-safe sink
//!
//! A `ConsoleHandle` can be cloned into any thread. Appends are marshaled
//! to the thread owning the [`Store`](crate::store::Store); callers do not
//! need to know which thread they are on.

use crate::actions::{Action, DebugConsoleAction};
use crate::dispatcher::Dispatcher;
use crate::sink::LogSink;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a handle hands its actions to the owner thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Wait until the owner thread applied the action
    #[default]
    Invoke,
    /// Queue the action and return immediately
    Post,
}

/// Cross-thread handle to the debug console
#[derive(Debug, Clone)]
pub struct ConsoleHandle {
    dispatcher: Dispatcher,
    visible: Arc<AtomicBool>,
    delivery: Delivery,
}

impl ConsoleHandle {
    pub(crate) fn new(dispatcher: Dispatcher, visible: Arc<AtomicBool>) -> Self {
        Self {
            dispatcher,
            visible,
            delivery: Delivery::default(),
        }
    }

    /// Same console, different delivery mode
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    /// Whether the console was visible when last reduced
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    /// Whether the calling thread is not the console's owner
    pub fn invoke_required(&self) -> bool {
        self.dispatcher.invoke_required()
    }

    pub fn show(&self) {
        self.deliver(Action::DebugConsole(DebugConsoleAction::Show));
    }

    pub fn request_close(&self) {
        self.deliver(Action::DebugConsole(DebugConsoleAction::RequestClose));
    }

    pub fn clear(&self) {
        self.deliver(Action::DebugConsole(DebugConsoleAction::Clear));
    }

    fn deliver(&self, action: Action) {
        // A closed store means the application is shutting down. There is
        // nowhere left to report that, and logging here would feed back
        // into this very handle through the console logger.
        let _ = match self.delivery {
            Delivery::Invoke => self.dispatcher.try_invoke(action),
            Delivery::Post => self.dispatcher.try_dispatch(action),
        };
    }
}

impl LogSink for ConsoleHandle {
    fn append_message(&self, text: &str) {
        if !self.is_visible() {
            return;
        }
        self.deliver(Action::append(text));
    }

    fn is_accepting(&self) -> bool {
        self.is_visible()
    }
}
