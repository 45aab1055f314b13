use crate::store::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    RegisterTapped,
    EnterWithoutRegistrationTapped,
    EnterTapped,
}

impl Action for OnboardingAction {}
