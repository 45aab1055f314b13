//! App coordinator: the root reducer composing the feature reducers, plus
//! the routing state machine that decides which screen is active.

mod action;
mod reducer;
mod route;
mod state;

pub use action::AppAction;
pub use reducer::AppReducer;
pub use route::Route;
pub use state::AppState;
