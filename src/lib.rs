//! pintpass: the state-management core of a loyalty-program app.
//!
//! The crate implements a unidirectional data flow: a single [`store::Store`]
//! holds the whole [`app::AppState`] tree, actions are dispatched through
//! `send`, a pure root reducer ([`app::AppReducer`]) computes the next state
//! plus an [`store::Effect`] descriptor, and the store executes effects whose
//! follow-up actions re-enter the same dispatch loop.
//!
//! Three feature reducers ([`onboarding`], [`registration`], [`main_tab`])
//! are composed by the coordinator in [`app`], which also owns the routing
//! state machine. The presentation layer is an external collaborator: it
//! observes state through [`store::Store::subscribe`] and emits actions; it
//! never mutates state directly.

pub mod app;
pub mod config;
pub mod logging;
pub mod main_tab;
pub mod onboarding;
pub mod registration;
pub mod store;
