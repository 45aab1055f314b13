//! Reducer for the registration form.

use crate::store::{Effect, Reducer};

use super::action::RegistrationAction;
use super::state::RegistrationState;

/// Registration form transitions.
///
/// Invalid input never surfaces an error: malformed phone characters are
/// filtered out and a submit on an invalid form is a no-op. The only
/// asynchronous path is the simulated registration call, which always
/// succeeds after its fixed delay.
pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Action = RegistrationAction;

    fn reduce(
        state: &mut RegistrationState,
        action: RegistrationAction,
    ) -> Effect<RegistrationAction> {
        match action {
            RegistrationAction::PhoneNumberChanged(raw) => {
                state.phone_number = filter_phone(&raw);
                Effect::none()
            }

            RegistrationAction::NameChanged(name) => {
                state.name = name;
                Effect::none()
            }

            RegistrationAction::BirthDateChanged(date) => {
                state.birth_date = Some(date);
                Effect::none()
            }

            RegistrationAction::AgreementToggled => {
                state.is_agreement_checked = !state.is_agreement_checked;
                Effect::none()
            }

            RegistrationAction::DatePickerToggled => {
                state.is_date_picker_visible = !state.is_date_picker_visible;
                Effect::none()
            }

            RegistrationAction::RegisterButtonTapped => {
                if !state.is_valid() {
                    return Effect::none();
                }
                state.is_loading = true;
                // Simulated network call: exactly one delayed completion,
                // no failure branch, no cancellation.
                Effect::send_after(state.submit_delay, RegistrationAction::RegistrationCompleted)
            }

            RegistrationAction::RegistrationCompleted => {
                state.is_loading = false;
                Effect::none()
            }
        }
    }
}

/// Keep ASCII digits plus a single leading `+`; drop everything else.
pub fn filter_phone(raw: &str) -> String {
    let mut filtered = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            filtered.push(c);
        } else if c == '+' && filtered.is_empty() {
            filtered.push(c);
        }
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_digits_and_leading_plus() {
        assert_eq!(filter_phone("abc+1(234)567-8900"), "+12345678900");
        assert_eq!(filter_phone("8 (912) 345-67-89"), "89123456789");
        assert_eq!(filter_phone("12+34"), "1234");
        assert_eq!(filter_phone("++79991234567"), "+79991234567");
        assert_eq!(filter_phone(""), "");
    }
}
