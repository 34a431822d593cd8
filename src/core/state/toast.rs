use std::time::Duration;

use crate::{
    core::{cmd::Cmd, msg::toast::ToastMsg},
    domain::notification::Notification,
};

/// Older toasts are dropped once this many are visible
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    /// None for toasts that stay until dismissed
    pub remaining: Option<Duration>,
}

/// Stack of transient notifications, newest last
#[derive(Debug, Clone)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000))
    }
}

impl ToastState {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn update(&mut self, msg: ToastMsg) -> Vec<Cmd> {
        match msg {
            ToastMsg::Push(notification) => {
                self.push(notification);
                vec![]
            }
            ToastMsg::DismissAll => {
                self.toasts.clear();
                vec![]
            }
            ToastMsg::Elapsed(elapsed) => {
                self.age(elapsed);
                vec![]
            }
        }
    }

    fn push(&mut self, notification: Notification) {
        let remaining = (!notification.is_persistent()).then_some(self.ttl);
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            notification,
            remaining,
        });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.evict_oldest();
        }
    }

    // Persistent toasts are only evicted when nothing else is left to drop
    fn evict_oldest(&mut self) {
        let index = self
            .toasts
            .iter()
            .position(|toast| toast.remaining.is_some())
            .unwrap_or(0);
        self.toasts.remove(index);
    }

    fn age(&mut self, elapsed: Duration) {
        for toast in &mut self.toasts {
            if let Some(remaining) = toast.remaining.as_mut() {
                *remaining = remaining.saturating_sub(elapsed);
            }
        }
        self.toasts
            .retain(|toast| toast.remaining != Some(Duration::ZERO));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::notification::Severity;

    fn messages(state: &ToastState) -> Vec<&str> {
        state
            .toasts()
            .iter()
            .map(|t| t.notification.message.as_str())
            .collect()
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut state = ToastState::default();
        state.update(ToastMsg::Push(Notification::info("a")));
        state.update(ToastMsg::Push(Notification::error("b")));

        let ids: Vec<u64> = state.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            state.latest().map(|t| t.notification.severity),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_dismiss_all_clears_everything() {
        let mut state = ToastState::default();
        state.update(ToastMsg::Push(Notification::info("a")));
        state.update(ToastMsg::Push(Notification::loading("b")));

        let cmds = state.update(ToastMsg::DismissAll);

        assert!(state.is_empty());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_toasts_expire_but_loading_stays() {
        let mut state = ToastState::new(Duration::from_millis(500));
        state.update(ToastMsg::Push(Notification::success("done")));
        state.update(ToastMsg::Push(Notification::loading("working")));

        state.update(ToastMsg::Elapsed(Duration::from_millis(250)));
        assert_eq!(messages(&state), vec!["done", "working"]);

        state.update(ToastMsg::Elapsed(Duration::from_millis(250)));
        assert_eq!(messages(&state), vec!["working"]);

        state.update(ToastMsg::Elapsed(Duration::from_secs(60)));
        assert_eq!(messages(&state), vec!["working"]);
    }

    #[test]
    fn test_oldest_toast_is_dropped_when_full() {
        let mut state = ToastState::default();
        for message in ["1", "2", "3", "4"] {
            state.update(ToastMsg::Push(Notification::info(message)));
        }
        assert_eq!(state.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(messages(&state), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_loading_toast_survives_overflow() {
        let mut state = ToastState::default();
        state.update(ToastMsg::Push(Notification::loading("Signing in...")));
        for message in ["e1", "e2", "e3"] {
            state.update(ToastMsg::Push(Notification::error(message)));
        }

        assert_eq!(state.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(messages(&state), vec!["Signing in...", "e2", "e3"]);
        assert_eq!(
            state.toasts()[0].notification.severity,
            Severity::Loading
        );
    }

    #[test]
    fn test_oldest_loading_toast_goes_when_all_persist() {
        let mut state = ToastState::default();
        for message in ["1", "2", "3", "4"] {
            state.update(ToastMsg::Push(Notification::loading(message)));
        }
        assert_eq!(messages(&state), vec!["2", "3", "4"]);
    }
}
