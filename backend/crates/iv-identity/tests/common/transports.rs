use iv_identity::{Email, IdentityError, IdentityResult, NotificationTransport};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Confirms every send and keeps a copy.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    async fn send(&self, email: &Email) -> IdentityResult<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Never confirms.
pub struct HangingTransport;

#[async_trait]
impl NotificationTransport for HangingTransport {
    async fn send(&self, _email: &Email) -> IdentityResult<()> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

/// Refuses every send.
pub struct FailingTransport;

#[async_trait]
impl NotificationTransport for FailingTransport {
    async fn send(&self, _email: &Email) -> IdentityResult<()> {
        Err(IdentityError::transport("mail relay refused"))
    }
}
