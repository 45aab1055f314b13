//! Root reducer: delegates to feature reducers and owns route transitions.

use tracing::debug;

use crate::main_tab::MainTabReducer;
use crate::onboarding::{OnboardingAction, OnboardingReducer};
use crate::registration::{RegistrationAction, RegistrationReducer};
use crate::store::{Effect, Reducer};

use super::action::AppAction;
use super::route::Route;
use super::state::AppState;

/// Composes the three feature reducers.
///
/// Each wrapped action is unwrapped and delegated to the owning feature
/// reducer; route transitions are evaluated against the post-update
/// sub-state; the feature effect is lifted back into [`AppAction`] via
/// [`Effect::map`] so its follow-up actions arrive re-wrapped.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(state: &mut AppState, action: AppAction) -> Effect<AppAction> {
        match action {
            AppAction::Onboarding(action) => {
                let effect = OnboardingReducer::reduce(&mut state.onboarding, action);
                if action == OnboardingAction::RegisterTapped {
                    state.route = Route::Registration;
                    debug!(route = ?state.route, "navigated");
                }
                effect.map(AppAction::Onboarding)
            }

            AppAction::Registration(action) => {
                let submitted = action == RegistrationAction::RegisterButtonTapped;
                let effect = RegistrationReducer::reduce(&mut state.registration, action);
                // A submit that passed validation moves straight to the main
                // tab; the delayed completion only clears the loading flag.
                if submitted && state.registration.is_valid() {
                    state.username = Some(state.registration.name.clone());
                    state.main_tab.user_name = state.registration.name.clone();
                    state.route = Route::MainTab;
                    debug!(route = ?state.route, username = %state.registration.name, "registration submitted");
                }
                effect.map(AppAction::Registration)
            }

            AppAction::MainTab(action) => {
                MainTabReducer::reduce(&mut state.main_tab, action).map(AppAction::MainTab)
            }

            AppAction::Navigate(route) => {
                state.route = route;
                debug!(route = ?state.route, "navigated directly");
                Effect::none()
            }
        }
    }
}
