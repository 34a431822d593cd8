use std::time::Duration;

use crate::{
    core::{
        cmd::Cmd,
        msg::{signup::SignupMsg, Msg},
    },
    domain::{
        credentials::Submission,
        form::{cycle_focus, FieldValue, FormProps, SignupField, SignupForm},
        notification::Notification,
    },
};

pub const LOADING_MESSAGE: &str = "Creating account...";
pub const SUCCESS_MESSAGE: &str = "Account created successfully! 🚀";

/// Sign-up view state
#[derive(Debug, Clone)]
pub struct SignupState {
    pub form: SignupForm,
    pub show_password: bool,
    pub submitting: bool,
    pub focus: SignupField,
    pub props: FormProps,
    pub ticket: u64,
    pub submit_delay: Duration,
}

impl Default for SignupState {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}

impl SignupState {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            form: SignupForm::default(),
            show_password: false,
            submitting: false,
            focus: SignupField::Name,
            props: FormProps::default(),
            ticket: 0,
            submit_delay,
        }
    }

    pub fn remount(&mut self, ticket: u64) {
        let fresh = Self {
            ticket,
            props: std::mem::take(&mut self.props),
            ..Self::new(self.submit_delay)
        };
        *self = fresh;
    }

    pub fn is_loading(&self) -> bool {
        self.props.is_loading || self.submitting
    }

    pub fn is_disabled(&self, field: SignupField) -> bool {
        self.is_loading() && field.locks_while_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Signing up..."
        } else {
            "Sign Up"
        }
    }

    pub fn update(&mut self, msg: SignupMsg) -> Vec<Cmd> {
        match msg {
            SignupMsg::FieldChanged(field, value) => {
                if self.is_disabled(field) {
                    log::debug!("sign-up: ignoring change to disabled field {field}");
                } else if !self.form.apply(field, value) {
                    log::warn!("sign-up: value does not fit field {field}");
                }
                vec![]
            }

            SignupMsg::TogglePasswordVisibility => {
                if !self.is_loading() {
                    self.show_password = !self.show_password;
                }
                vec![]
            }

            SignupMsg::Submit => self.submit(),

            SignupMsg::SubmitCompleted(submission) => {
                if submission.ticket == self.ticket {
                    self.submitting = false;
                } else {
                    log::debug!(
                        "sign-up: submit completed for unmounted form (ticket {})",
                        submission.ticket
                    );
                }
                vec![
                    Cmd::DismissNotifications,
                    Cmd::Notify(Notification::success(SUCCESS_MESSAGE)),
                    Cmd::SignupSucceeded(submission),
                ]
            }

            SignupMsg::FocusNext => {
                self.move_focus(true);
                vec![]
            }

            SignupMsg::FocusPrev => {
                self.move_focus(false);
                vec![]
            }

            SignupMsg::Focus(field) => {
                self.focus = field;
                vec![]
            }

            SignupMsg::SetLoading(is_loading) => {
                self.props.is_loading = is_loading;
                vec![]
            }

            SignupMsg::SetError(error) => {
                self.props.error = error;
                vec![]
            }
        }
    }

    /// Required fields, then terms agreement, then the delay
    fn submit(&mut self) -> Vec<Cmd> {
        if self.is_loading() {
            log::debug!("sign-up: submit ignored while loading");
            return vec![];
        }
        self.submitting = true;

        if let Err(e) = self.form.validate() {
            log::info!("sign-up: validation failed: {e}");
            self.submitting = false;
            return vec![Cmd::Notify(Notification::error(e.to_string()))];
        }

        let submission = Submission::new(self.ticket, &self.form.email, &self.form.password);
        vec![
            Cmd::Notify(Notification::loading(LOADING_MESSAGE)),
            Cmd::delay(
                self.submit_delay,
                Msg::Signup(SignupMsg::SubmitCompleted(submission)),
            ),
        ]
    }

    fn move_focus(&mut self, forward: bool) {
        if let Some(next) = cycle_focus(&SignupField::ORDER, self.focus, forward) {
            self.focus = next;
        }
    }

    pub fn toggled(&self, field: SignupField) -> Option<FieldValue> {
        match field {
            SignupField::Agree => Some(FieldValue::Checked(!self.form.agree)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled(agree: bool) -> SignupState {
        let mut state = SignupState::default();
        state.form = SignupForm {
            name: "Jo".into(),
            email: "a@b.com".into(),
            password: "longenough".into(),
            agree,
        };
        state
    }

    #[test]
    fn test_missing_fields_checked_before_terms() {
        let mut state = filled(false);
        state.form.name.clear();

        let cmds = state.update(SignupMsg::Submit);

        assert_eq!(
            cmds,
            vec![Cmd::Notify(Notification::error("Please fill out all fields!"))]
        );
        assert!(!state.submitting);
    }

    #[test]
    fn test_terms_not_accepted() {
        let mut state = filled(false);

        let cmds = state.update(SignupMsg::Submit);

        assert_eq!(
            cmds,
            vec![Cmd::Notify(Notification::error(
                "You must agree to the Terms & Privacy Policy!"
            ))]
        );
        assert!(!state.submitting);
    }

    #[test]
    fn test_valid_submit_schedules_delay() {
        let mut state = filled(true);

        let cmds = state.update(SignupMsg::Submit);

        assert!(state.submitting);
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0], Cmd::Notify(Notification::loading(LOADING_MESSAGE)));
        match &cmds[1] {
            Cmd::Delay { duration, msg } => {
                assert_eq!(*duration, Duration::from_millis(1200));
                assert_eq!(
                    **msg,
                    Msg::Signup(SignupMsg::SubmitCompleted(Submission::new(
                        0,
                        "a@b.com",
                        "longenough"
                    )))
                );
            }
            other => panic!("Expected Delay command, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_completed_reports_success() {
        let mut state = filled(true);
        state.update(SignupMsg::Submit);

        let submission = Submission::new(0, "a@b.com", "longenough");
        let cmds = state.update(SignupMsg::SubmitCompleted(submission.clone()));

        assert!(!state.submitting);
        assert_eq!(
            cmds,
            vec![
                Cmd::DismissNotifications,
                Cmd::Notify(Notification::success(SUCCESS_MESSAGE)),
                Cmd::SignupSucceeded(submission),
            ]
        );
    }

    #[test]
    fn test_agree_checkbox_locks_while_loading() {
        let mut state = filled(true);
        state.update(SignupMsg::Submit);

        state.update(SignupMsg::FieldChanged(
            SignupField::Agree,
            FieldValue::Checked(false),
        ));

        assert!(state.form.agree);
        assert!(state.is_disabled(SignupField::Agree));
        assert!(!state.is_disabled(SignupField::SignInLink));
        assert_eq!(state.submit_label(), "Signing up...");
    }

    #[test]
    fn test_toggled_agree() {
        let state = filled(false);
        assert_eq!(
            state.toggled(SignupField::Agree),
            Some(FieldValue::Checked(true))
        );
        assert_eq!(state.toggled(SignupField::Email), None);
    }

    #[test]
    fn test_focus_cycle() {
        let mut state = SignupState::default();
        assert_eq!(state.focus, SignupField::Name);
        state.update(SignupMsg::FocusPrev);
        assert_eq!(state.focus, SignupField::SignInLink);
        state.update(SignupMsg::FocusNext);
        assert_eq!(state.focus, SignupField::Name);
    }
}
