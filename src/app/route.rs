/// Identifier of the currently displayed top-level screen.
///
/// Exactly one route is active at any time; sub-states of inactive routes
/// still exist but are inert. Transitions are reducer-driven; the view
/// layer can only change the route by dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Onboarding,
    Registration,
    MainTab,
}
