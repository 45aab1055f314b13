use crate::store::State;

/// Availability of the three onboarding buttons. Only registration is open
/// in the current product configuration; the other two entry points are
/// rendered disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingState {
    pub is_registration_enabled: bool,
    pub is_enter_without_registration_enabled: bool,
    pub is_enter_enabled: bool,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            is_registration_enabled: true,
            is_enter_without_registration_enabled: false,
            is_enter_enabled: false,
        }
    }
}

impl State for OnboardingState {}
