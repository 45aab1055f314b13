//! Onboarding screen feature: three entry buttons, no local logic.

mod action;
mod reducer;
mod state;

pub use action::OnboardingAction;
pub use reducer::OnboardingReducer;
pub use state::OnboardingState;
