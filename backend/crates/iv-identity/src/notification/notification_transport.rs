use crate::{Email, IdentityResult};

use async_trait::async_trait;

/// Delivery channel for owner notifications.
///
/// `send` resolves once the transport has confirmed delivery (or refused it).
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn send(&self, email: &Email) -> IdentityResult<()>;
}
