pub mod router;
pub mod signin;
pub mod signup;
pub mod system;
pub mod toast;

use crate::domain::form::{SigninField, SignupField};

use router::RouterMsg;
use signin::SigninMsg;
use signup::SignupMsg;
use system::SystemMsg;
use toast::ToastMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Navigation between views
    Router(RouterMsg),

    // Form operations (delegated to SigninState / SignupState)
    Signin(SigninMsg),
    Signup(SignupMsg),

    // Notification stack
    Toast(ToastMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Toast(toast_msg) => toast_msg.is_frequent(),
            _ => false,
        }
    }

    /// Messages carrying a password value; never log their payload
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            Msg::Signin(SigninMsg::FieldChanged(SigninField::Password, _))
                | Msg::Signup(SignupMsg::FieldChanged(SignupField::Password, _))
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Toast(ToastMsg::Elapsed(Duration::from_millis(250))).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Signin(SigninMsg::Submit).is_frequent());
    }

    #[test]
    fn test_password_changes_are_sensitive() {
        use crate::domain::form::FieldValue;

        let msg = Msg::Signup(SignupMsg::FieldChanged(
            SignupField::Password,
            FieldValue::Text("hunter22".into()),
        ));
        assert!(msg.is_sensitive());

        let msg = Msg::Signin(SigninMsg::FieldChanged(
            SigninField::Email,
            FieldValue::Text("a@b.com".into()),
        ));
        assert!(!msg.is_sensitive());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Signin(SigninMsg::Submit),
            Msg::Signup(SignupMsg::Submit)
        );
    }
}
