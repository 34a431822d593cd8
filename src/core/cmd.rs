use std::time::Duration;

use crate::{
    core::msg::Msg,
    domain::{credentials::Submission, notification::Notification},
};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (timers, notifications, callbacks into the
/// embedding application, terminal control)
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    // Notification channel
    Notify(Notification),
    DismissNotifications,

    /// Deliver `msg` back to the runtime once `duration` has elapsed.
    /// There is no way to cancel a scheduled delay.
    Delay {
        duration: Duration,
        msg: Box<Msg>,
    },

    // Callbacks into the auth handler
    SigninSucceeded(Submission),
    SignupSucceeded(Submission),
    ForgotPassword,

    // UI-related commands
    Tui(TuiCommand),

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    pub fn delay(duration: Duration, msg: Msg) -> Cmd {
        Cmd::Delay {
            duration,
            msg: Box::new(msg),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::Delay { .. } => true,

            Cmd::Notify(..)
            | Cmd::DismissNotifications
            | Cmd::SigninSucceeded(..)
            | Cmd::SignupSucceeded(..)
            | Cmd::ForgotPassword
            | Cmd::Tui(..)
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Short name for execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Notify(..) => "Notify",
            Cmd::DismissNotifications => "DismissNotifications",
            Cmd::Delay { .. } => "Delay",
            Cmd::SigninSucceeded(..) => "SigninSucceeded",
            Cmd::SignupSucceeded(..) => "SignupSucceeded",
            Cmd::ForgotPassword => "ForgotPassword",
            Cmd::Tui(..) => "Tui",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::system::SystemMsg;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::DismissNotifications;
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        let cmds = vec![Cmd::DismissNotifications, Cmd::ForgotPassword];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::delay(Duration::from_millis(10), Msg::System(SystemMsg::Quit)).is_async());
        assert!(!Cmd::Notify(Notification::info("hi")).is_async());
        assert!(!Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 50
        })
        .is_async());
    }

    #[test]
    fn test_cmd_batch_is_async() {
        let sync_batch = Cmd::Batch(vec![Cmd::DismissNotifications]);
        assert!(!sync_batch.is_async());

        let async_batch = Cmd::Batch(vec![
            Cmd::DismissNotifications,
            Cmd::delay(Duration::ZERO, Msg::System(SystemMsg::Quit)),
        ]);
        assert!(async_batch.is_async());
    }

    #[test]
    fn test_cmd_name() {
        assert_eq!(Cmd::ForgotPassword.name(), "ForgotPassword");
        assert_eq!(Cmd::Batch(vec![]).name(), "Batch");
    }
}
