//! Reducer for the onboarding screen.

use crate::store::{Effect, Reducer};

use super::action::OnboardingAction;
use super::state::OnboardingState;

/// The onboarding buttons only signal intent; navigation away from the
/// screen is entirely the coordinator's responsibility, so every action is
/// a local no-op.
pub struct OnboardingReducer;

impl Reducer for OnboardingReducer {
    type State = OnboardingState;
    type Action = OnboardingAction;

    fn reduce(_state: &mut OnboardingState, action: OnboardingAction) -> Effect<OnboardingAction> {
        match action {
            OnboardingAction::RegisterTapped
            | OnboardingAction::EnterWithoutRegistrationTapped
            | OnboardingAction::EnterTapped => Effect::none(),
        }
    }
}
