use crate::domain::{
    credentials::Submission,
    form::{FieldValue, SignupField},
};

/// Messages for the sign-up form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupMsg {
    FieldChanged(SignupField, FieldValue),
    TogglePasswordVisibility,
    Submit,
    SubmitCompleted(Submission),

    FocusNext,
    FocusPrev,
    Focus(SignupField),

    SetLoading(bool),
    SetError(Option<String>),
}
