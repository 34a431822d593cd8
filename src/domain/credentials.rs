use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Credentials handed to the auth handler after a successful submit
#[derive(Debug)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Values captured when a submit passes validation.
///
/// Travels with the delayed completion message so that the callback
/// receives exactly what was submitted, even if the form is remounted
/// in the meantime. `ticket` identifies the form mount.
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub email: String,
    password: String,
}

impl Submission {
    pub fn new(ticket: u64, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ticket,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("ticket", &self.ticket)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Convenience for handlers and tests that need the plain password
pub fn expose_password(credentials: &Credentials) -> &str {
    credentials.password.expose_secret()
}
