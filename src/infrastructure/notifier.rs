//! Notification service
//!
//! The forms only describe notifications as commands. A [`Notifier`] decides
//! where they go: the toast stack of the running app, or a recording for tests.

use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::msg::{toast::ToastMsg, Msg},
    domain::notification::Notification,
};

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<()>;

    /// Removes every visible notification
    fn dismiss(&self) -> Result<()>;
}

/// Feeds notifications back into the runtime as toast messages
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    sender: mpsc::UnboundedSender<Msg>,
}

impl ToastNotifier {
    pub fn new(sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self { sender }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        self.sender
            .send(Msg::Toast(ToastMsg::Push(notification.clone())))?;
        Ok(())
    }

    fn dismiss(&self) -> Result<()> {
        self.sender.send(Msg::Toast(ToastMsg::DismissAll))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    Notify(Notification),
    Dismiss,
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<NotifierEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Notifications still on screen if this were a real toast stack
    pub fn visible(&self) -> Vec<Notification> {
        let mut visible = Vec::new();
        for event in self.events() {
            match event {
                NotifierEvent::Notify(notification) => visible.push(notification),
                NotifierEvent::Dismiss => visible.clear(),
            }
        }
        visible
    }

    fn record(&self, event: NotifierEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| eyre!("notifier event log poisoned"))?
            .push(event);
        Ok(())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        self.record(NotifierEvent::Notify(notification.clone()))
    }

    fn dismiss(&self) -> Result<()> {
        self.record(NotifierEvent::Dismiss)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toast_notifier_sends_toast_messages() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = ToastNotifier::new(tx);

        notifier.notify(&Notification::loading("Signing in...")).unwrap();
        notifier.dismiss().unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            Msg::Toast(ToastMsg::Push(Notification::loading("Signing in...")))
        );
        assert_eq!(rx.try_recv().unwrap(), Msg::Toast(ToastMsg::DismissAll));
    }

    #[test]
    fn test_toast_notifier_fails_when_runtime_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let notifier = ToastNotifier::new(tx);
        assert!(notifier.dismiss().is_err());
    }

    #[test]
    fn test_recording_notifier_visible() {
        let notifier = RecordingNotifier::default();
        notifier.notify(&Notification::loading("wait")).unwrap();
        notifier.dismiss().unwrap();
        notifier.notify(&Notification::success("done")).unwrap();

        assert_eq!(notifier.visible(), vec![Notification::success("done")]);
        assert_eq!(notifier.events().len(), 3);
    }
}
