//! Main tabbed screen feature: tab selection and the loyalty barcode.

mod action;
mod reducer;
mod state;

pub use action::MainTabAction;
pub use reducer::{MainTabReducer, BARCODE_MAX, BARCODE_MIN};
pub use state::{MainTabState, Tab};
