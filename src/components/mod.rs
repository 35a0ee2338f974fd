//! UI Components
//!
//! Leptos components rendered into the server-side page.

mod alert_host;

pub use alert_host::AlertHost;
