//! The store: state owner, dispatch entry point, effect executor.

use std::marker::PhantomData;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::trace;

use super::effect::{Dispatcher, Effect};
use super::reducer::Reducer;

/// Owns the state tree and serializes every state mutation through one
/// dispatch path.
///
/// `send` takes `&mut self`, so no two reducer invocations can ever run
/// concurrently; that is the sole synchronization on the state tree. Effects
/// may do their work on other tasks, but the actions they produce come back
/// through the store's queue and are applied by the same dispatch loop as
/// caller-issued actions.
///
/// The store is constructed once at application start and handed down to the
/// presentation layer explicitly; it is not a hidden singleton.
pub struct Store<R: Reducer> {
    state: R::State,
    queue_tx: mpsc::UnboundedSender<R::Action>,
    queue_rx: mpsc::UnboundedReceiver<R::Action>,
    observers: watch::Sender<R::State>,
    /// In-flight effect handles, aborted when the store is dropped.
    effects: Vec<JoinHandle<()>>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial_state: R::State) -> Self {
        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        let (observers, _) = watch::channel(initial_state.clone());
        Self {
            state: initial_state,
            queue_tx,
            queue_rx,
            observers,
            effects: Vec::new(),
            _reducer: PhantomData,
        }
    }

    /// The current state. Read-only; all mutation goes through `send`.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Subscribe to state snapshots. A new value is published after every
    /// reducer invocation, in the same turn as the `send` call.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.observers.subscribe()
    }

    /// Dispatch one action: run the reducer, publish the new state, and
    /// begin executing the returned effect.
    pub fn send(&mut self, action: R::Action) {
        trace!(?action, "dispatch");
        let effect = R::reduce(&mut self.state, action);
        self.observers.send_replace(self.state.clone());
        self.effects.retain(|handle| !handle.is_finished());
        self.execute(effect);
    }

    fn execute(&mut self, effect: Effect<R::Action>) {
        match effect {
            Effect::None => {}
            Effect::Send { action, delay } => {
                let queue = self.queue_tx.clone();
                self.effects.push(tokio::spawn(async move {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    let _ = queue.send(action);
                }));
            }
            Effect::Run(task) => {
                let dispatcher = Dispatcher::from_queue(self.queue_tx.clone());
                self.effects.push(tokio::spawn(task.into_future(dispatcher)));
            }
        }
    }

    /// Drive the dispatch loop until no effects are in flight and the queue
    /// is empty. Under a paused tokio clock this is deterministic, which is
    /// how delayed effects are tested without real waiting.
    pub async fn settle(&mut self) {
        loop {
            let in_flight: Vec<JoinHandle<()>> = self.effects.drain(..).collect();
            for handle in in_flight {
                let _ = handle.await;
            }
            let mut delivered = false;
            while let Ok(action) = self.queue_rx.try_recv() {
                delivered = true;
                self.send(action);
            }
            if !delivered && self.effects.is_empty() {
                break;
            }
        }
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        for handle in &self.effects {
            handle.abort();
        }
    }
}
