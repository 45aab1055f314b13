use crate::main_tab::MainTabState;
use crate::onboarding::OnboardingState;
use crate::registration::RegistrationState;
use crate::store::State;

use super::route::Route;

/// The whole state tree: one sub-state per feature plus routing state and
/// the cross-cutting username.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub route: Route,
    pub onboarding: OnboardingState,
    pub registration: RegistrationState,
    pub main_tab: MainTabState,
    /// Captured from the registration form on successful submit.
    pub username: Option<String>,
}

impl State for AppState {}
