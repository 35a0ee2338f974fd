//! Notification Store
//!
//! Uses Leptos reactive_stores so the alert host re-renders per change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::notifications::{AlertKind, Notification};

#[derive(Clone, Debug, Default, Store)]
pub struct NotificationState {
    /// Visible alerts, oldest first
    pub alerts: Vec<Notification>,
    /// Last id handed out
    pub last_id: u32,
}

/// Type alias for the store
pub type NotificationStore = Store<NotificationState>;

/// Get the notification store from context
pub fn use_notification_store() -> NotificationStore {
    expect_context::<NotificationStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append an alert and return its id
pub fn store_push_alert(store: &NotificationStore, kind: AlertKind, message: &str) -> u32 {
    let id = {
        let field = store.last_id();
        let mut last_id = field.write();
        *last_id = last_id.wrapping_add(1);
        *last_id
    };
    store.alerts().write().push(Notification {
        id,
        kind,
        message: message.to_string(),
    });
    id
}

/// Remove an alert by id; unknown ids are ignored
pub fn store_dismiss_alert(store: &NotificationStore, id: u32) {
    let present = store.alerts().read_untracked().iter().any(|alert| alert.id == id);
    if present {
        store.alerts().write().retain(|alert| alert.id != id);
    }
}

/// Current alerts (tracked)
pub fn store_alerts(store: &NotificationStore) -> Vec<Notification> {
    store.alerts().get()
}
