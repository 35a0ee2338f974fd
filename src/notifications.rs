//! Transient Alerts
//!
//! Alerts are appended, never replaced, and dismiss themselves after a
//! fixed delay unless the user closes them first.

use gloo_timers::callback::Timeout;

use crate::store::{store_dismiss_alert, store_push_alert, NotificationStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    /// Bootstrap contextual class
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Warning => "alert-warning",
            AlertKind::Danger => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: AlertKind,
    pub message: String,
}

/// Handle for raising alerts from event handlers outside the component tree
#[derive(Clone, Copy)]
pub struct Notifier {
    store: NotificationStore,
    dismiss_after_ms: u32,
}

impl Notifier {
    pub fn new(store: NotificationStore, dismiss_after_ms: u32) -> Self {
        Self { store, dismiss_after_ms }
    }

    pub fn notify(&self, kind: AlertKind, message: &str) {
        let id = store_push_alert(&self.store, kind, message);
        let store = self.store;
        Timeout::new(self.dismiss_after_ms, move || {
            // No-op if already closed by hand
            store_dismiss_alert(&store, id);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_classes() {
        assert_eq!(AlertKind::Success.css_class(), "alert-success");
        assert_eq!(AlertKind::Warning.css_class(), "alert-warning");
        assert_eq!(AlertKind::Danger.css_class(), "alert-danger");
    }
}
