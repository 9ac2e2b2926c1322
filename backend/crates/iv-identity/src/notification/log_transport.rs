use crate::{Email, IdentityResult, NotificationTransport};

use async_trait::async_trait;
use log::info;

/// Transport that writes each email to the log and confirms immediately.
///
/// For development only; nothing leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

#[async_trait]
impl NotificationTransport for LogTransport {
    async fn send(&self, email: &Email) -> IdentityResult<()> {
        info!(
            "[email] to={} subject={:?} body={:?}",
            email.destination, email.subject, email.body
        );
        Ok(())
    }
}
