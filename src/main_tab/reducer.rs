//! Reducer for the main tabbed screen.

use rand::Rng;

use crate::store::{Effect, Reducer};

use super::action::MainTabAction;
use super::state::MainTabState;

/// Inclusive range of generated loyalty-card numbers: always 9 decimal
/// digits, never a leading zero.
pub const BARCODE_MIN: u32 = 100_000_000;
pub const BARCODE_MAX: u32 = 999_999_999;

pub struct MainTabReducer;

impl Reducer for MainTabReducer {
    type State = MainTabState;
    type Action = MainTabAction;

    fn reduce(state: &mut MainTabState, action: MainTabAction) -> Effect<MainTabAction> {
        match action {
            MainTabAction::TabSelected(tab) => {
                state.selected_tab = tab;
                Effect::none()
            }

            MainTabAction::ShowBarcodeTapped => {
                let value = rand::thread_rng().gen_range(BARCODE_MIN..=BARCODE_MAX);
                state.barcode_value = Some(value.to_string());
                state.is_showing_barcode = true;
                Effect::none()
            }
        }
    }
}
