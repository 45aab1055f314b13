//! Base trait for actions (user/system events).

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User gestures (button taps, text edits)
/// - System events (timer completions, navigation requests)
///
/// Actions are processed by reducers to produce new states. `Debug` is
/// required so the store can trace every dispatch.
pub trait Action: Debug + Send + 'static {}
