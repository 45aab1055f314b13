//! Unidirectional state-management primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ (State, Effect) ──→ observers
//!    ↑                        │
//!    └──── dispatch queue ←───┘
//! ```
//!
//! - **State**: single owned value, mutated only inside a reducer call
//! - **Action**: user actions or system events
//! - **Reducer**: pure function `(&mut State, Action) -> Effect<Action>`
//! - **Effect**: description of deferred work that may dispatch further actions
//! - **Store**: owns the state, the dispatch queue, and in-flight effects
//!
//! Effect-issued actions re-enter the store through the dispatch queue, never
//! inline within the `send` call that produced them. That queue boundary is
//! what keeps reducer invocations strictly sequential.

mod action;
mod effect;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::Action;
pub use effect::{Dispatcher, Effect, EffectTask};
pub use reducer::Reducer;
pub use state::State;
pub use store::Store;
