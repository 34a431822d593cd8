use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::Msg,
    },
    infrastructure::{auth_handler::AuthHandler, notifier::Notifier},
};

/// Command executor that bridges Elm commands to the notifier, the auth
/// handler, timers and the terminal
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    notifier: Arc<dyn Notifier>,
    auth_handler: Arc<dyn AuthHandler>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// `msg_sender` receives the messages of elapsed delays
    pub fn new(
        msg_sender: mpsc::UnboundedSender<Msg>,
        notifier: Arc<dyn Notifier>,
        auth_handler: Arc<dyn AuthHandler>,
    ) -> Self {
        Self {
            msg_sender,
            notifier,
            auth_handler,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::Notify(notification) => self.notifier.notify(notification)?,
            Cmd::DismissNotifications => self.notifier.dismiss()?,

            Cmd::Delay { duration, msg } => {
                let sender = self.msg_sender.clone();
                let duration = *duration;
                let msg = (**msg).clone();
                tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    if sender.send(msg).is_err() {
                        log::debug!("CmdExecutor: runtime gone before delay elapsed");
                    }
                });
            }

            Cmd::SigninSucceeded(submission) => {
                log::info!("sign-in accepted for {}", submission.email);
                self.auth_handler
                    .on_signin_success(&submission.credentials())?;
            }

            Cmd::SignupSucceeded(submission) => {
                log::info!("sign-up accepted for {}", submission.email);
                self.auth_handler
                    .on_signup_success(&submission.credentials())?;
            }

            Cmd::ForgotPassword => self.auth_handler.on_forgot_password()?,

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_tui_sender: bool,
}
