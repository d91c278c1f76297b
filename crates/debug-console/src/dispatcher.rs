//! Dispatcher - posts actions onto the owner thread's queue
//!
//! The store, and with it all UI state, belongs to a single owner thread.
//! Every other thread reaches it through a `Dispatcher`, which places an
//! [`Envelope`] on the store's inbox. The owner drains the inbox in
//! [`Store::pump`](crate::store::Store::pump), so every mutation runs on the
//! owner thread and each action is applied as a whole.
//!
//! Two delivery flavours exist:
//! - [`Dispatcher::dispatch`]: fire-and-forget, returns once the action is queued
//! - [`Dispatcher::invoke`]: blocks until the owner has applied the action

use crate::actions::Action;
use std::sync::mpsc::{self, Sender, SyncSender};
use std::thread::{self, ThreadId};

/// Errors from handing an action to the owner thread
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The store has been dropped; nobody is draining the queue anymore
    #[error("owner thread is gone, action was not delivered")]
    Disconnected,
    /// The action was queued but the store went away before applying it
    #[error("owner thread dropped the action before applying it")]
    AckDropped,
}

/// An action in flight to the owner thread
#[derive(Debug)]
pub struct Envelope {
    pub action: Action,
    /// Signalled once the action has been applied (synchronous delivery only)
    pub done: Option<SyncSender<()>>,
}

/// Dispatcher for sending actions to the store from any thread
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: Sender<Envelope>,
    owner: ThreadId,
}

impl Dispatcher {
    /// Create a dispatcher feeding the given inbox, owned by `owner`
    pub fn new(tx: Sender<Envelope>, owner: ThreadId) -> Self {
        Self { tx, owner }
    }

    /// Whether the calling thread must go through the queue to reach the state
    pub fn invoke_required(&self) -> bool {
        thread::current().id() != self.owner
    }

    /// Dispatch an action, logging if the owner is gone
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.try_dispatch(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }

    /// Queue an action without waiting for it to be applied
    pub fn try_dispatch(&self, action: Action) -> Result<(), DispatchError> {
        self.tx
            .send(Envelope { action, done: None })
            .map_err(|_| DispatchError::Disconnected)
    }

    /// Dispatch an action and wait until the owner thread has applied it
    pub fn invoke(&self, action: Action) {
        if let Err(e) = self.try_invoke(action) {
            log::error!("Dispatcher: failed to invoke action: {}", e);
        }
    }

    /// Queue an action and block until the owner thread has applied it
    ///
    /// On the owner thread itself this only queues the action: waiting
    /// there would block the very loop that has to apply it.
    pub fn try_invoke(&self, action: Action) -> Result<(), DispatchError> {
        if !self.invoke_required() {
            return self.try_dispatch(action);
        }

        let (done_tx, done_rx) = mpsc::sync_channel(1);
        self.tx
            .send(Envelope {
                action,
                done: Some(done_tx),
            })
            .map_err(|_| DispatchError::Disconnected)?;

        done_rx.recv().map_err(|_| DispatchError::AckDropped)
    }
}
