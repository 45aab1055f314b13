//! Effects - side effects declared by reducers.
//!
//! An [`Effect`] is returned from every reducer call and executed by the
//! store after the state update that produced it. Keeping effects as plain
//! data means reducer output can be asserted on in tests without running
//! any asynchronous work.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::action::Action;

type BoxedEffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A deferred unit of work that may dispatch zero or more follow-up actions.
///
/// There is no cancellation surface: an effect runs to completion or is
/// abandoned when the owning store is dropped.
pub enum Effect<A> {
    /// No follow-up work.
    None,
    /// Deliver exactly one action through the dispatch queue after `delay`.
    /// Delivery is always asynchronous with respect to the `send` call that
    /// produced the effect, even when the delay is zero.
    Send { action: A, delay: Duration },
    /// Caller-supplied asynchronous work; may dispatch any number of actions
    /// over its lifetime via the [`Dispatcher`] it receives.
    Run(EffectTask<A>),
}

impl<A: Action> Effect<A> {
    /// An effect that does nothing.
    pub fn none() -> Self {
        Effect::None
    }

    /// Schedule one action for delivery on the next turn of the dispatch loop.
    pub fn send(action: A) -> Self {
        Effect::Send {
            action,
            delay: Duration::ZERO,
        }
    }

    /// Schedule one action for delivery after `delay`.
    pub fn send_after(delay: Duration, action: A) -> Self {
        Effect::Send { action, delay }
    }

    /// Run arbitrary asynchronous work with a dispatch handle.
    pub fn run<F, Fut>(body: F) -> Self
    where
        F: FnOnce(Dispatcher<A>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Effect::Run(EffectTask(Box::new(move |dispatcher| {
            Box::pin(body(dispatcher))
        })))
    }

    /// Lift this effect into a parent action type by transforming every
    /// action it produces. This is how feature effects are re-wrapped into
    /// the root action type when reducers are composed.
    pub fn map<B, F>(self, transform: F) -> Effect<B>
    where
        B: Action,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Send { action, delay } => Effect::Send {
                action: transform(action),
                delay,
            },
            Effect::Run(task) => Effect::Run(EffectTask(Box::new(
                move |dispatcher: Dispatcher<B>| task.into_future(dispatcher.narrow(transform)),
            ))),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Send { action, delay } => f
                .debug_struct("Effect::Send")
                .field("action", action)
                .field("delay", delay)
                .finish(),
            Effect::Run(_) => write!(f, "Effect::Run(..)"),
        }
    }
}

/// The boxed body of an [`Effect::Run`] variant.
pub struct EffectTask<A>(Box<dyn FnOnce(Dispatcher<A>) -> BoxedEffectFuture + Send + 'static>);

impl<A> EffectTask<A> {
    /// Consume the task, binding it to a dispatch handle.
    pub fn into_future(self, dispatcher: Dispatcher<A>) -> BoxedEffectFuture {
        (self.0)(dispatcher)
    }
}

/// Handle through which effect bodies dispatch follow-up actions.
///
/// Dispatched actions are pushed onto the owning store's queue and applied by
/// its dispatch loop; sends after the store is gone are silently dropped.
pub struct Dispatcher<A> {
    deliver: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            deliver: Arc::clone(&self.deliver),
        }
    }
}

impl<A: Action> Dispatcher<A> {
    pub(crate) fn from_queue(queue: mpsc::UnboundedSender<A>) -> Self {
        Self {
            deliver: Arc::new(move |action| {
                let _ = queue.send(action);
            }),
        }
    }

    /// Dispatch one follow-up action.
    pub fn send(&self, action: A) {
        (self.deliver)(action);
    }

    /// Derive a dispatcher for a child action type: every child action is
    /// wrapped into the parent type before delivery.
    pub fn narrow<B, F>(self, wrap: F) -> Dispatcher<B>
    where
        B: Action,
        F: Fn(B) -> A + Send + Sync + 'static,
    {
        Dispatcher {
            deliver: Arc::new(move |action| self.send(wrap(action))),
        }
    }
}
