//! Form models for the sign-in and sign-up views

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::validation::{require_filled, ValidationError};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "demopassword";

/// Shown as a hint next to password inputs; submit does not enforce it.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// New value for a single field. Checkboxes carry a flag, everything else text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// How a focusable control reacts to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Checkbox,
    Button,
    Link,
}

impl FieldKind {
    pub fn is_editable(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Secret)
    }
}

/// Props a parent can inject into a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormProps {
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SigninField {
    DemoButton,
    Email,
    Password,
    ForgotPassword,
    RememberMe,
    Submit,
    SignUpLink,
}

impl SigninField {
    pub const ORDER: [SigninField; 7] = [
        SigninField::DemoButton,
        SigninField::Email,
        SigninField::Password,
        SigninField::ForgotPassword,
        SigninField::RememberMe,
        SigninField::Submit,
        SigninField::SignUpLink,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            SigninField::Email => FieldKind::Text,
            SigninField::Password => FieldKind::Secret,
            SigninField::RememberMe => FieldKind::Checkbox,
            SigninField::DemoButton | SigninField::ForgotPassword | SigninField::Submit => {
                FieldKind::Button
            }
            SigninField::SignUpLink => FieldKind::Link,
        }
    }

    /// Controls that lock while the form is loading
    pub fn locks_while_loading(&self) -> bool {
        matches!(
            self,
            SigninField::DemoButton
                | SigninField::Email
                | SigninField::Password
                | SigninField::RememberMe
                | SigninField::Submit
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SignupField {
    Name,
    Email,
    Password,
    Agree,
    Submit,
    SignInLink,
}

impl SignupField {
    pub const ORDER: [SignupField; 6] = [
        SignupField::Name,
        SignupField::Email,
        SignupField::Password,
        SignupField::Agree,
        SignupField::Submit,
        SignupField::SignInLink,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            SignupField::Name | SignupField::Email => FieldKind::Text,
            SignupField::Password => FieldKind::Secret,
            SignupField::Agree => FieldKind::Checkbox,
            SignupField::Submit => FieldKind::Button,
            SignupField::SignInLink => FieldKind::Link,
        }
    }

    pub fn locks_while_loading(&self) -> bool {
        !matches!(self, SignupField::SignInLink)
    }
}

/// Next (or previous) entry of `fields` after `current`, wrapping around.
/// Falls back to the first entry when `current` is not in the list.
pub fn cycle_focus<F: Copy + PartialEq>(fields: &[F], current: F, forward: bool) -> Option<F> {
    let len = fields.len();
    if len == 0 {
        return None;
    }
    let Some(index) = fields.iter().position(|f| *f == current) else {
        return fields.first().copied();
    };
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    fields.get(next).copied()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigninForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl SigninForm {
    pub fn demo() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            remember_me: false,
        }
    }

    /// Applies a change to one field. Returns false when the value does not
    /// fit the field, leaving the form untouched.
    pub fn apply(&mut self, field: SigninField, value: FieldValue) -> bool {
        match (field, value) {
            (SigninField::Email, FieldValue::Text(v)) => self.email = v,
            (SigninField::Password, FieldValue::Text(v)) => self.password = v,
            (SigninField::RememberMe, FieldValue::Checked(v)) => self.remember_me = v,
            _ => return false,
        }
        true
    }

    pub fn text(&self, field: SigninField) -> Option<&str> {
        match field {
            SigninField::Email => Some(&self.email),
            SigninField::Password => Some(&self.password),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_filled(&[self.email.as_str(), self.password.as_str()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub agree: bool,
}

impl SignupForm {
    pub fn apply(&mut self, field: SignupField, value: FieldValue) -> bool {
        match (field, value) {
            (SignupField::Name, FieldValue::Text(v)) => self.name = v,
            (SignupField::Email, FieldValue::Text(v)) => self.email = v,
            (SignupField::Password, FieldValue::Text(v)) => self.password = v,
            (SignupField::Agree, FieldValue::Checked(v)) => self.agree = v,
            _ => return false,
        }
        true
    }

    pub fn text(&self, field: SignupField) -> Option<&str> {
        match field {
            SignupField::Name => Some(&self.name),
            SignupField::Email => Some(&self.email),
            SignupField::Password => Some(&self.password),
            _ => None,
        }
    }

    /// Required fields are checked before the terms agreement
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_filled(&[
            self.name.as_str(),
            self.email.as_str(),
            self.password.as_str(),
        ])?;
        if !self.agree {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_signin_apply_touches_only_one_key() {
        let mut form = SigninForm::default();
        assert!(form.apply(SigninField::Email, FieldValue::Text("a@b.com".into())));
        assert_eq!(
            form,
            SigninForm {
                email: "a@b.com".into(),
                ..Default::default()
            }
        );

        assert!(form.apply(SigninField::RememberMe, FieldValue::Checked(true)));
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "");
        assert!(form.remember_me);
    }

    #[test]
    fn test_signin_apply_rejects_mismatched_value() {
        let mut form = SigninForm::default();
        assert!(!form.apply(SigninField::RememberMe, FieldValue::Text("yes".into())));
        assert!(!form.apply(SigninField::Submit, FieldValue::Checked(true)));
        assert_eq!(form, SigninForm::default());
    }

    #[rstest]
    #[case(SignupField::Name, FieldValue::Text("Jo".into()), SignupForm { name: "Jo".into(), ..Default::default() })]
    #[case(SignupField::Email, FieldValue::Text("a@b.com".into()), SignupForm { email: "a@b.com".into(), ..Default::default() })]
    #[case(SignupField::Password, FieldValue::Text("secret".into()), SignupForm { password: "secret".into(), ..Default::default() })]
    #[case(SignupField::Agree, FieldValue::Checked(true), SignupForm { agree: true, ..Default::default() })]
    fn test_signup_apply_touches_only_one_key(
        #[case] field: SignupField,
        #[case] value: FieldValue,
        #[case] expected: SignupForm,
    ) {
        let mut form = SignupForm::default();
        assert!(form.apply(field, value));
        assert_eq!(form, expected);
    }

    #[test]
    fn test_signup_apply_keeps_earlier_edits() {
        let mut form = SignupForm::default();
        assert!(form.apply(SignupField::Name, FieldValue::Text("Jo".into())));
        assert!(form.apply(SignupField::Agree, FieldValue::Checked(true)));
        assert!(form.apply(SignupField::Name, FieldValue::Text("Joan".into())));
        assert_eq!(
            form,
            SignupForm {
                name: "Joan".into(),
                agree: true,
                ..Default::default()
            }
        );
    }

    #[rstest]
    #[case(SignupField::Agree, FieldValue::Text("yes".into()))]
    #[case(SignupField::Name, FieldValue::Checked(true))]
    #[case(SignupField::Password, FieldValue::Checked(false))]
    #[case(SignupField::Submit, FieldValue::Checked(true))]
    #[case(SignupField::SignInLink, FieldValue::Text("x".into()))]
    fn test_signup_apply_rejects_mismatched_value(
        #[case] field: SignupField,
        #[case] value: FieldValue,
    ) {
        let mut form = SignupForm {
            name: "Jo".into(),
            email: "a@b.com".into(),
            password: "secret".into(),
            agree: false,
        };
        let before = form.clone();
        assert!(!form.apply(field, value));
        assert_eq!(form, before);
    }

    #[rstest]
    #[case("", "x", Err(ValidationError::MissingFields))]
    #[case("a@b.com", "", Err(ValidationError::MissingFields))]
    #[case("a@b.com", "x", Ok(()))]
    fn test_signin_validate(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: Result<(), ValidationError>,
    ) {
        let form = SigninForm {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        };
        assert_eq!(form.validate(), expected);
    }

    #[rstest]
    #[case("", "a@b.com", "longenough", true, Err(ValidationError::MissingFields))]
    #[case("Jo", "", "longenough", true, Err(ValidationError::MissingFields))]
    #[case("Jo", "a@b.com", "", false, Err(ValidationError::MissingFields))]
    #[case("Jo", "a@b.com", "longenough", false, Err(ValidationError::TermsNotAccepted))]
    #[case("Jo", "a@b.com", "longenough", true, Ok(()))]
    fn test_signup_validate(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] agree: bool,
        #[case] expected: Result<(), ValidationError>,
    ) {
        let form = SignupForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            agree,
        };
        assert_eq!(form.validate(), expected);
    }

    #[test]
    fn test_password_length_is_not_enforced() {
        let form = SigninForm {
            email: "a@b.com".into(),
            password: "x".into(),
            remember_me: false,
        };
        assert!(form.password.len() < PASSWORD_MIN_LENGTH);
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_demo_form() {
        let form = SigninForm::demo();
        assert_eq!(form.email, DEMO_EMAIL);
        assert_eq!(form.password, DEMO_PASSWORD);
        assert!(!form.remember_me);
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let fields = SignupField::ORDER;
        assert_eq!(
            cycle_focus(&fields, SignupField::SignInLink, true),
            Some(SignupField::Name)
        );
        assert_eq!(
            cycle_focus(&fields, SignupField::Name, false),
            Some(SignupField::SignInLink)
        );
        assert_eq!(
            cycle_focus(&fields, SignupField::Email, true),
            Some(SignupField::Password)
        );
    }

    #[test]
    fn test_cycle_focus_unknown_current() {
        let fields = [SigninField::Email, SigninField::Password];
        assert_eq!(
            cycle_focus(&fields, SigninField::ForgotPassword, true),
            Some(SigninField::Email)
        );
        let empty: [SigninField; 0] = [];
        assert_eq!(cycle_focus(&empty, SigninField::Email, true), None);
    }

    #[test]
    fn test_field_kinds() {
        assert!(SigninField::Email.kind().is_editable());
        assert!(SigninField::Password.kind().is_editable());
        assert!(!SigninField::RememberMe.kind().is_editable());
        assert_eq!(SignupField::SignInLink.kind(), FieldKind::Link);
        assert!(!SigninField::SignUpLink.locks_while_loading());
        assert!(!SigninField::ForgotPassword.locks_while_loading());
        assert!(SignupField::Agree.locks_while_loading());
    }
}
