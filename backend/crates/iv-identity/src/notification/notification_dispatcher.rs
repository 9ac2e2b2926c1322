use crate::{Email, IdentityError, IdentityMetrics, IdentityResult, NotificationTransport};

use iv_config::NotificationConfig;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::time::timeout;

/// Sends owner notifications, waiting a bounded time for the transport to confirm.
#[derive(Clone)]
pub struct NotificationDispatcher {
    transport: Arc<dyn NotificationTransport>,
    timeout: Duration,
    subject: String,
    metrics: IdentityMetrics,
}

impl NotificationDispatcher {
    pub fn new(transport: Arc<dyn NotificationTransport>, config: &NotificationConfig) -> Self {
        Self {
            transport,
            timeout: config.timeout(),
            subject: config.subject.clone(),
            metrics: IdentityMetrics::new(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Deliver `body` to `destination` under the configured subject.
    pub async fn notify(&self, destination: &str, body: String) -> IdentityResult<()> {
        self.notify_with_subject(destination, self.subject.clone(), body)
            .await
    }

    /// Deliver an email to `destination`.
    ///
    /// An empty destination is skipped. A transport that has not confirmed within
    /// the configured timeout yields `NotificationTimeout`; the send itself is
    /// abandoned, not retried.
    pub async fn notify_with_subject(
        &self,
        destination: &str,
        subject: String,
        body: String,
    ) -> IdentityResult<()> {
        if destination.trim().is_empty() {
            debug!("No recovery contact on file, notification skipped");
            self.metrics.notification("skipped");
            return Ok(());
        }

        let email = Email {
            destination: destination.to_string(),
            subject,
            body,
        };

        match timeout(self.timeout, self.transport.send(&email)).await {
            Ok(Ok(())) => {
                info!("Notification delivered to {destination}");
                self.metrics.notification("sent");
                Ok(())
            }
            Ok(Err(e)) => {
                error!("Notification to {destination} failed: {e}");
                self.metrics.notification("failed");
                Err(e)
            }
            Err(_) => {
                warn!(
                    "Notification to {destination} not confirmed within {:?}",
                    self.timeout
                );
                self.metrics.notification("timeout");
                Err(IdentityError::notification_timeout(
                    destination,
                    self.timeout.as_secs(),
                ))
            }
        }
    }
}
