//! Notification sink for user-visible success/error messages.
//!
//! The core never swallows a failure silently: transport errors caught at
//! the client boundary are routed through this trait. The UI layer provides
//! its own implementation; `TracingNotifier` is the default for headless use.

use async_trait::async_trait;

/// Sink for success/error messages with an optional detail string.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn success(&self, message: &str, detail: Option<&str>);

    async fn error(&self, message: &str, detail: Option<&str>);
}

/// Default implementation that logs through `tracing`.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn success(&self, message: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => tracing::info!(%message, %detail, "notification"),
            None => tracing::info!(%message, "notification"),
        }
    }

    async fn error(&self, message: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => tracing::warn!(%message, %detail, "error notification"),
            None => tracing::warn!(%message, "error notification"),
        }
    }
}
