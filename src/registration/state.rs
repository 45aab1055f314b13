use std::time::Duration;

use chrono::NaiveDate;

use crate::store::State;

/// Delay of the simulated registration network call.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationState {
    /// Phone input, already filtered to digits plus an optional leading `+`.
    /// Non-conforming characters are dropped at the point of change, so the
    /// raw keystrokes are never retained.
    pub phone_number: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub is_agreement_checked: bool,
    pub is_date_picker_visible: bool,
    /// True between a valid submit and the delayed completion action.
    pub is_loading: bool,
    /// Duration of the simulated network call, fixed at construction.
    pub submit_delay: Duration,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            phone_number: String::new(),
            name: String::new(),
            birth_date: None,
            is_agreement_checked: false,
            is_date_picker_visible: false,
            is_loading: false,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }
}

impl State for RegistrationState {}

impl RegistrationState {
    pub fn with_submit_delay(delay: Duration) -> Self {
        Self {
            submit_delay: delay,
            ..Self::default()
        }
    }

    /// Number of digits in the filtered phone; the leading `+` does not count.
    pub fn digit_count(&self) -> usize {
        self.phone_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count()
    }

    /// The form submits iff the phone has at least 10 digits and the user
    /// agreement is checked.
    pub fn is_valid(&self) -> bool {
        self.digit_count() >= 10 && self.is_agreement_checked
    }

    /// Birth date as displayed on the form; empty until one is picked.
    pub fn formatted_birth_date(&self) -> String {
        self.birth_date
            .map(|date| date.format("%d / %m / %Y").to_string())
            .unwrap_or_default()
    }
}
