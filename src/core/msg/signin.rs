use crate::domain::{
    credentials::Submission,
    form::{FieldValue, SigninField},
};

/// Messages for the sign-in form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigninMsg {
    FieldChanged(SigninField, FieldValue),
    TogglePasswordVisibility,
    DemoLogin,
    Submit,
    /// Delivered once the simulated delay of an accepted submit has elapsed
    SubmitCompleted(Submission),
    ForgotPassword,

    FocusNext,
    FocusPrev,
    Focus(SigninField),

    // Props injected by the embedding application
    SetLoading(bool),
    SetError(Option<String>),
}
