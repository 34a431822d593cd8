use std::time::Duration;

use crate::domain::notification::Notification;

/// Messages for the notification stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastMsg {
    Push(Notification),
    DismissAll,
    /// Time passed since the previous tick
    Elapsed(Duration),
}

impl ToastMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, ToastMsg::Elapsed(_))
    }
}
