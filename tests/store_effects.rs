//! Store dispatch-loop behavior: the asynchronous effect boundary, queue
//! serialization, and effect lifting through a parent reducer.

use pintpass::store::{Action, Effect, Reducer, State, Store};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct RelayState {
    started: u32,
    finished: u32,
}

impl State for RelayState {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RelayAction {
    /// Kick off async work that reports twice.
    Start,
    /// Kick off a zero-delay single send.
    StartOne,
    Finished,
}

impl Action for RelayAction {}

struct RelayReducer;

impl Reducer for RelayReducer {
    type State = RelayState;
    type Action = RelayAction;

    fn reduce(state: &mut RelayState, action: RelayAction) -> Effect<RelayAction> {
        match action {
            RelayAction::Start => {
                state.started += 1;
                Effect::run(|dispatcher| async move {
                    dispatcher.send(RelayAction::Finished);
                    dispatcher.send(RelayAction::Finished);
                })
            }
            RelayAction::StartOne => {
                state.started += 1;
                Effect::send(RelayAction::Finished)
            }
            RelayAction::Finished => {
                state.finished += 1;
                Effect::none()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ShellState {
    relay: RelayState,
}

impl State for ShellState {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellAction {
    Relay(RelayAction),
}

impl Action for ShellAction {}

struct ShellReducer;

impl Reducer for ShellReducer {
    type State = ShellState;
    type Action = ShellAction;

    fn reduce(state: &mut ShellState, action: ShellAction) -> Effect<ShellAction> {
        match action {
            ShellAction::Relay(action) => {
                RelayReducer::reduce(&mut state.relay, action).map(ShellAction::Relay)
            }
        }
    }
}

#[tokio::test]
async fn effect_actions_are_never_delivered_inline() {
    let mut store: Store<RelayReducer> = Store::new(RelayState::default());
    store.send(RelayAction::Start);

    // The run effect has not crossed the queue boundary yet.
    assert_eq!(store.state().started, 1);
    assert_eq!(store.state().finished, 0);

    store.settle().await;
    assert_eq!(store.state().finished, 2);
}

#[tokio::test]
async fn zero_delay_send_still_goes_through_the_queue() {
    let mut store: Store<RelayReducer> = Store::new(RelayState::default());
    store.send(RelayAction::StartOne);
    assert_eq!(store.state().finished, 0);

    store.settle().await;
    assert_eq!(store.state().finished, 1);
}

#[tokio::test]
async fn observers_see_the_post_update_state_in_the_same_turn() {
    let mut store: Store<RelayReducer> = Store::new(RelayState::default());
    let states = store.subscribe();

    store.send(RelayAction::Finished);
    assert_eq!(states.borrow().finished, 1);
}

#[tokio::test]
async fn mapped_effects_deliver_wrapped_actions_to_the_parent_store() {
    let mut store: Store<ShellReducer> = Store::new(ShellState::default());
    store.send(ShellAction::Relay(RelayAction::Start));
    store.settle().await;

    assert_eq!(store.state().relay.started, 1);
    assert_eq!(store.state().relay.finished, 2);
}

#[tokio::test]
async fn send_and_settle_cover_repeated_dispatch_rounds() {
    // The store needs no background loop: the caller alternates between
    // dispatching and settling for as long as it lives.
    let mut store: Store<RelayReducer> = Store::new(RelayState::default());

    store.send(RelayAction::StartOne);
    store.settle().await;
    assert_eq!(store.state().finished, 1);

    store.send(RelayAction::Start);
    store.settle().await;
    assert_eq!(store.state().started, 2);
    assert_eq!(store.state().finished, 3);
}

#[tokio::test]
async fn settle_chases_effects_spawned_by_effect_actions() {
    // Start -> Finished x2, plus StartOne -> Finished through a second hop.
    let mut store: Store<RelayReducer> = Store::new(RelayState::default());
    store.send(RelayAction::Start);
    store.send(RelayAction::StartOne);
    store.settle().await;

    assert_eq!(store.state().started, 2);
    assert_eq!(store.state().finished, 3);
}
