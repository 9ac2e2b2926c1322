use crate::{EscalationQueue, EscalationReason, IdentityError, IdentityMetrics, IdentityResult};

use iv_core::{AccountKey, IdentityRecord};
use iv_deferred::{DeferredAction, ExpiryVerdict};
use iv_store::IdentityStore;

use std::time::Duration;

use async_trait::async_trait;
use log::{error, info, warn};

/// A wallet change waiting for the owner's login.
///
/// Holds the record as it was when the rebind was requested; that snapshot is
/// what lands under the new key on confirmation.
pub struct PendingRebind {
    pub(crate) record: IdentityRecord,
    pub(crate) old_key: AccountKey,
    pub(crate) new_key: AccountKey,
    pub(crate) window: Duration,
    pub(crate) store: IdentityStore,
    pub(crate) escalations: EscalationQueue,
    pub(crate) metrics: IdentityMetrics,
}

impl PendingRebind {
    pub fn old_key(&self) -> &AccountKey {
        &self.old_key
    }

    pub fn new_key(&self) -> &AccountKey {
        &self.new_key
    }
}

#[async_trait]
impl DeferredAction for PendingRebind {
    type Error = IdentityError;

    async fn complete(self, key_suffix: &str) -> IdentityResult<()> {
        if key_suffix != self.new_key.as_str() {
            return Err(IdentityError::validation(format!(
                "rebind staged for {} resolved as {key_suffix}",
                self.new_key
            )));
        }

        self.store.save(&self.new_key, &self.record).await?;

        // The account is already reachable under the new key; a leftover old
        // record is reported, not rolled back.
        if let Err(e) = self.store.delete(&self.old_key).await {
            error!(
                "Rebind {} -> {} saved but old record not removed: {e}",
                self.old_key, self.new_key
            );
            self.escalations.raise(
                EscalationReason::StaleOldRecord,
                &self.old_key,
                &self.new_key,
                e.to_string(),
            );
            self.metrics.stale_record();
        }

        info!(
            "Rebind confirmed: {} -> {} (self_id {})",
            self.old_key, self.new_key, self.record.self_id
        );
        self.metrics.rebind_confirmed();
        Ok(())
    }

    fn expire(self, key: &str) -> ExpiryVerdict {
        let cause = IdentityError::timed_out(key, self.window.as_secs());
        warn!(
            "Rebind {} -> {} never confirmed, escalating: {cause}",
            self.old_key, self.new_key
        );
        self.escalations.raise(
            EscalationReason::RebindExpired,
            &self.old_key,
            &self.new_key,
            cause.to_string(),
        );
        self.metrics.rebind_expired();
        ExpiryVerdict::Escalate
    }
}
