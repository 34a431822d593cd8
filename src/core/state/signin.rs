use std::time::Duration;

use crate::{
    core::{
        cmd::Cmd,
        msg::{signin::SigninMsg, Msg},
    },
    domain::{
        credentials::Submission,
        form::{cycle_focus, FieldValue, FormProps, SigninField, SigninForm},
        notification::Notification,
    },
};

pub const LOADING_MESSAGE: &str = "Signing in...";
pub const SUCCESS_MESSAGE: &str = "Successfully signed in! 🚀";
pub const DEMO_FILLED_MESSAGE: &str = "Demo credentials filled ✨";

/// Sign-in view state. One instance lives for one mount of the view.
#[derive(Debug, Clone)]
pub struct SigninState {
    pub form: SigninForm,
    pub show_password: bool,
    pub submitting: bool,
    pub focus: SigninField,
    pub props: FormProps,
    /// Identifies the current mount; see `SigninMsg::SubmitCompleted`
    pub ticket: u64,
    pub forgot_password_enabled: bool,
    pub submit_delay: Duration,
}

impl Default for SigninState {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}

impl SigninState {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            form: SigninForm::default(),
            show_password: false,
            submitting: false,
            focus: SigninField::Email,
            props: FormProps::default(),
            ticket: 0,
            forgot_password_enabled: false,
            submit_delay,
        }
    }

    /// Fresh form values for a new mount. Injected props and settings survive.
    pub fn remount(&mut self, ticket: u64) {
        let fresh = Self {
            ticket,
            props: std::mem::take(&mut self.props),
            forgot_password_enabled: self.forgot_password_enabled,
            ..Self::new(self.submit_delay)
        };
        *self = fresh;
    }

    pub fn is_loading(&self) -> bool {
        self.props.is_loading || self.submitting
    }

    pub fn is_disabled(&self, field: SigninField) -> bool {
        self.is_loading() && field.locks_while_loading()
    }

    /// Focusable controls in tab order
    pub fn available_fields(&self) -> Vec<SigninField> {
        SigninField::ORDER
            .into_iter()
            .filter(|f| *f != SigninField::ForgotPassword || self.forgot_password_enabled)
            .collect()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_MESSAGE
        } else {
            "Sign In"
        }
    }

    pub fn update(&mut self, msg: SigninMsg) -> Vec<Cmd> {
        match msg {
            SigninMsg::FieldChanged(field, value) => {
                if self.is_disabled(field) {
                    log::debug!("sign-in: ignoring change to disabled field {field}");
                } else if !self.form.apply(field, value) {
                    log::warn!("sign-in: value does not fit field {field}");
                }
                vec![]
            }

            SigninMsg::TogglePasswordVisibility => {
                if !self.is_loading() {
                    self.show_password = !self.show_password;
                }
                vec![]
            }

            SigninMsg::DemoLogin => {
                if self.is_disabled(SigninField::DemoButton) {
                    return vec![];
                }
                self.form = SigninForm::demo();
                vec![Cmd::Notify(Notification::info(DEMO_FILLED_MESSAGE))]
            }

            SigninMsg::Submit => self.submit(),

            SigninMsg::SubmitCompleted(submission) => {
                if submission.ticket == self.ticket {
                    self.submitting = false;
                } else {
                    log::debug!(
                        "sign-in: submit completed for unmounted form (ticket {})",
                        submission.ticket
                    );
                }
                vec![
                    Cmd::DismissNotifications,
                    Cmd::Notify(Notification::success(SUCCESS_MESSAGE)),
                    Cmd::SigninSucceeded(submission),
                ]
            }

            SigninMsg::ForgotPassword => {
                if self.forgot_password_enabled {
                    vec![Cmd::ForgotPassword]
                } else {
                    vec![]
                }
            }

            SigninMsg::FocusNext => {
                self.move_focus(true);
                vec![]
            }

            SigninMsg::FocusPrev => {
                self.move_focus(false);
                vec![]
            }

            SigninMsg::Focus(field) => {
                if self.available_fields().contains(&field) {
                    self.focus = field;
                }
                vec![]
            }

            SigninMsg::SetLoading(is_loading) => {
                self.props.is_loading = is_loading;
                vec![]
            }

            SigninMsg::SetError(error) => {
                self.props.error = error;
                vec![]
            }
        }
    }

    /// Validates first; only an accepted submit schedules the delay
    fn submit(&mut self) -> Vec<Cmd> {
        if self.is_loading() {
            log::debug!("sign-in: submit ignored while loading");
            return vec![];
        }
        self.submitting = true;

        if let Err(e) = self.form.validate() {
            log::info!("sign-in: validation failed: {e}");
            self.submitting = false;
            return vec![Cmd::Notify(Notification::error(e.to_string()))];
        }

        let submission = Submission::new(self.ticket, &self.form.email, &self.form.password);
        vec![
            Cmd::Notify(Notification::loading(LOADING_MESSAGE)),
            Cmd::delay(
                self.submit_delay,
                Msg::Signin(SigninMsg::SubmitCompleted(submission)),
            ),
        ]
    }

    fn move_focus(&mut self, forward: bool) {
        if let Some(next) = cycle_focus(&self.available_fields(), self.focus, forward) {
            self.focus = next;
        }
    }

    /// Value a checkbox would take when toggled
    pub fn toggled(&self, field: SigninField) -> Option<FieldValue> {
        match field {
            SigninField::RememberMe => Some(FieldValue::Checked(!self.form.remember_me)),
            _ => None,
        }
    }
}
