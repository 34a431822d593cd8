//! Callbacks into the embedding application

use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result};

use crate::domain::credentials::{expose_password, Credentials};

/// Receives accepted submissions from the auth forms.
///
/// Every method has a do-nothing default, so an embedding application only
/// implements what it cares about. Errors are logged by the executor and
/// never reach the forms.
pub trait AuthHandler: Send + Sync {
    fn on_signin_success(&self, _credentials: &Credentials) -> Result<()> {
        Ok(())
    }

    fn on_signup_success(&self, _credentials: &Credentials) -> Result<()> {
        Ok(())
    }

    fn on_forgot_password(&self) -> Result<()> {
        Ok(())
    }

    /// Whether the sign-in view should offer the "Forgot?" control
    fn handles_forgot_password(&self) -> bool {
        false
    }
}

/// Default handler of the standalone binary: records accepted submissions
/// in the log file
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAuthHandler;

impl AuthHandler for LoggingAuthHandler {
    fn on_signin_success(&self, credentials: &Credentials) -> Result<()> {
        log::info!("signed in as {}", credentials.email());
        Ok(())
    }

    fn on_signup_success(&self, credentials: &Credentials) -> Result<()> {
        log::info!("account created for {}", credentials.email());
        Ok(())
    }

    fn on_forgot_password(&self) -> Result<()> {
        log::info!("password reset requested");
        Ok(())
    }

    fn handles_forgot_password(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Signin { email: String, password: String },
    Signup { email: String, password: String },
    ForgotPassword,
}

/// Keeps every callback for later inspection
#[derive(Debug, Default)]
pub struct RecordingAuthHandler {
    events: Mutex<Vec<AuthEvent>>,
    forgot_password: bool,
}

impl RecordingAuthHandler {
    pub fn with_forgot_password() -> Self {
        Self {
            forgot_password: true,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<AuthEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn record(&self, event: AuthEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| eyre!("auth event log poisoned"))?
            .push(event);
        Ok(())
    }
}

impl AuthHandler for RecordingAuthHandler {
    fn on_signin_success(&self, credentials: &Credentials) -> Result<()> {
        self.record(AuthEvent::Signin {
            email: credentials.email().to_string(),
            password: expose_password(credentials).to_string(),
        })
    }

    fn on_signup_success(&self, credentials: &Credentials) -> Result<()> {
        self.record(AuthEvent::Signup {
            email: credentials.email().to_string(),
            password: expose_password(credentials).to_string(),
        })
    }

    fn on_forgot_password(&self) -> Result<()> {
        self.record(AuthEvent::ForgotPassword)
    }

    fn handles_forgot_password(&self) -> bool {
        self.forgot_password
    }
}
