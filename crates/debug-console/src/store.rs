use crate::actions::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::handle::ConsoleHandle;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

/// Upper bound of queued actions applied by a single `pump` call, so a
/// flood of producer messages cannot starve rendering and input
const MAX_ACTIONS_PER_PUMP: usize = 4096;

/// Store - holds application state and manages the Redux loop
///
/// The thread that creates the store is its owner: only that thread may
/// call `dispatch` and `pump`. Other threads talk to it through the
/// [`Dispatcher`] or a [`ConsoleHandle`].
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    inbox: Receiver<Envelope>,
    /// Mirror of `state.debug_console.visible` readable from any thread
    console_visible: Arc<AtomicBool>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (tx, inbox) = mpsc::channel();
        let console_visible = Arc::new(AtomicBool::new(initial_state.debug_console.visible));
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(tx, thread::current().id()),
            inbox,
            console_visible,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// A thread-safe sink that appends to this store's debug console
    pub fn console_handle(&self) -> ConsoleHandle {
        ConsoleHandle::new(self.dispatcher.clone(), Arc::clone(&self.console_visible))
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Must be called on the owner thread. Actions dispatched by middleware
    /// are queued and applied by the next `pump`.
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            let state = std::mem::take(&mut self.state);
            self.state = reduce(state, &action);
            self.console_visible
                .store(self.state.debug_console.visible, Ordering::Release);
        }
    }

    /// Apply actions queued by other threads and by middleware
    ///
    /// Returns the number of actions applied. Producers blocked in
    /// [`Dispatcher::invoke`] are released as soon as their action is applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while applied < MAX_ACTIONS_PER_PUMP {
            let Ok(Envelope { action, done }) = self.inbox.try_recv() else {
                break;
            };
            self.dispatch(action);
            if let Some(done) = done {
                // The producer may have given up waiting; nothing to do then
                let _ = done.send(());
            }
            applied += 1;
        }
        applied
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{DebugConsoleAction, GlobalAction};
    use crate::sink::LogSink;
    use debug_console_config::AppConfig;

    fn visible_store() -> Store {
        let config = AppConfig {
            start_visible: true,
            ..AppConfig::default()
        };
        Store::new(AppState::new(config))
    }

    /// Keep pumping until the producer thread has finished
    fn pump_until_done<T>(store: &mut Store, producer: thread::JoinHandle<T>) -> T {
        while !producer.is_finished() {
            store.pump();
            thread::yield_now();
        }
        let result = producer.join().unwrap();
        store.pump();
        result
    }

    #[test]
    fn test_store_dispatch_quit() {
        let mut store = Store::default();
        assert!(store.state().running);

        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(!store.state().running);
    }

    #[test]
    fn test_dispatch_updates_visibility_mirror() {
        let mut store = Store::default();
        let handle = store.console_handle();
        assert!(!handle.is_visible());

        store.dispatch(Action::DebugConsole(DebugConsoleAction::Show));
        assert!(handle.is_visible());

        store.dispatch(Action::DebugConsole(DebugConsoleAction::RequestClose));
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_pump_applies_queued_actions_in_order() {
        let mut store = visible_store();
        let dispatcher = store.dispatcher().clone();
        dispatcher.dispatch(Action::append("a"));
        dispatcher.dispatch(Action::append("b"));

        assert_eq!(store.pump(), 2);
        assert_eq!(store.state().debug_console.buffer(), "a\r\nb");
        assert_eq!(store.pump(), 0);
    }

    #[test]
    fn test_append_from_other_thread_is_marshaled() {
        let mut store = visible_store();
        let handle = store.console_handle();

        let producer = thread::spawn(move || {
            handle.append_message("a");
            handle.append_message("b");
        });
        pump_until_done(&mut store, producer);

        assert_eq!(store.state().debug_console.buffer(), "a\r\nb");
    }

    #[test]
    fn test_append_from_owner_thread_is_queued() {
        let mut store = visible_store();
        let handle = store.console_handle();
        assert!(!handle.invoke_required());

        // Must not block even though delivery is synchronous
        handle.append_message("local");
        assert_eq!(store.state().debug_console.buffer(), "");

        store.pump();
        assert_eq!(store.state().debug_console.buffer(), "local");
    }

    #[test]
    fn test_per_thread_order_is_preserved() {
        let mut store = visible_store();

        let producers: Vec<_> = (0..4)
            .map(|id| {
                let handle = store.console_handle();
                thread::spawn(move || {
                    for seq in 0..25 {
                        handle.append_message(&format!("{}:{}", id, seq));
                    }
                })
            })
            .collect();

        while !producers.iter().all(|p| p.is_finished()) {
            store.pump();
            thread::yield_now();
        }
        for producer in producers {
            producer.join().unwrap();
        }
        store.pump();

        let lines = &store.state().debug_console.lines;
        assert_eq!(lines.len(), 100);
        for id in 0..4 {
            let seqs: Vec<usize> = lines
                .iter()
                .filter_map(|line| line.split_once(':'))
                .filter(|(owner, _)| owner.parse::<usize>().ok() == Some(id))
                .map(|(_, seq)| seq.parse().unwrap())
                .collect();
            assert_eq!(seqs, (0..25).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_hidden_console_does_not_queue_appends() {
        let mut store = Store::default();
        let handle = store.console_handle();

        let producer = thread::spawn(move || {
            for i in 0..10 {
                handle.append_message(&format!("dropped {}", i));
            }
        });
        producer.join().unwrap();

        assert_eq!(store.pump(), 0);
        assert_eq!(store.state().debug_console.buffer(), "");
    }

    #[test]
    fn test_append_arriving_after_close_is_dropped() {
        let mut store = visible_store();
        let dispatcher = store.dispatcher().clone();

        // Queued while visible, applied after the console closed
        dispatcher.dispatch(Action::append("late"));
        store.dispatch(Action::DebugConsole(DebugConsoleAction::RequestClose));
        store.pump();

        assert_eq!(store.state().debug_console.buffer(), "");
    }

    #[test]
    fn test_clear_from_other_thread_while_hidden() {
        let mut store = visible_store();
        store.dispatch(Action::append("a"));
        store.dispatch(Action::DebugConsole(DebugConsoleAction::RequestClose));

        let handle = store.console_handle();
        let producer = thread::spawn(move || handle.clear());
        pump_until_done(&mut store, producer);

        assert_eq!(store.state().debug_console.buffer(), "");
        assert!(!store.state().debug_console.visible);
    }

    #[test]
    fn test_request_close_keeps_console_usable() {
        let mut store = visible_store();
        store.dispatch(Action::DebugConsole(DebugConsoleAction::RequestClose));
        assert!(!store.state().debug_console.visible);

        store.dispatch(Action::DebugConsole(DebugConsoleAction::Show));
        store.dispatch(Action::append("again"));
        assert_eq!(store.state().debug_console.buffer(), "again");
    }

    #[test]
    fn test_blocked_producer_released_when_store_dropped() {
        let store = visible_store();
        let dispatcher: Dispatcher = store.dispatcher().clone();

        let producer = thread::spawn(move || dispatcher.try_invoke(Action::append("never")));
        // Give the producer a chance to queue before the owner goes away
        thread::sleep(std::time::Duration::from_millis(20));
        drop(store);

        assert!(producer.join().unwrap().is_err());
    }

    #[test]
    fn test_pump_is_bounded() {
        let mut store = visible_store();
        let dispatcher = store.dispatcher().clone();
        for i in 0..(MAX_ACTIONS_PER_PUMP + 10) {
            dispatcher.dispatch(Action::append(i.to_string()));
        }

        assert_eq!(store.pump(), MAX_ACTIONS_PER_PUMP);
        assert_eq!(store.pump(), 10);
    }
}
