//! Registration form feature: phone/name/birth-date input, agreement
//! checkbox, and a simulated registration call.

mod action;
mod reducer;
mod state;

pub use action::RegistrationAction;
pub use reducer::{filter_phone, RegistrationReducer};
pub use state::{RegistrationState, DEFAULT_SUBMIT_DELAY};
