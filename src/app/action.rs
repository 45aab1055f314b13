use crate::main_tab::MainTabAction;
use crate::onboarding::OnboardingAction;
use crate::registration::RegistrationAction;
use crate::store::Action;

use super::route::Route;

/// Root action type: feature actions arrive wrapped in their own case, plus
/// a root-level navigation escape hatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Onboarding(OnboardingAction),
    Registration(RegistrationAction),
    MainTab(MainTabAction),
    /// Direct route change, bypassing feature logic.
    Navigate(Route),
}

impl Action for AppAction {}
