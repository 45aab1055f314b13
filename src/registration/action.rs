use chrono::NaiveDate;

use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationAction {
    /// Raw text-field input; the reducer filters it before storing.
    PhoneNumberChanged(String),
    NameChanged(String),
    BirthDateChanged(NaiveDate),
    AgreementToggled,
    DatePickerToggled,
    RegisterButtonTapped,
    /// Delivered by the simulated network effect after its fixed delay.
    RegistrationCompleted,
}

impl Action for RegistrationAction {}
