use crate::{
    EscalationQueue, IdentityError, IdentityMetrics, IdentityResult, PendingRebind,
    RebindRegistry,
};

use iv_config::RebindConfig;
use iv_core::AccountKey;
use iv_store::IdentityStore;

use std::time::Duration;

use log::{debug, info};

/// Moves an identity record from one account key to another, gated on the
/// owner logging in under the new key within the rebind window.
#[derive(Clone)]
pub struct RebindWorkflow {
    store: IdentityStore,
    registry: RebindRegistry,
    escalations: EscalationQueue,
    namespace: String,
    window: Duration,
    metrics: IdentityMetrics,
}

impl RebindWorkflow {
    pub fn new(
        store: IdentityStore,
        registry: RebindRegistry,
        escalations: EscalationQueue,
        config: &RebindConfig,
    ) -> Self {
        Self {
            store,
            registry,
            escalations,
            namespace: config.namespace.clone(),
            window: config.window(),
            metrics: IdentityMetrics::new(),
        }
    }

    /// Stage a move of `old`'s record to `new`.
    ///
    /// Nothing is written until the owner logs in as `new`. A second request for
    /// the same `new` key replaces the first.
    pub async fn request_rebind(&self, old: &AccountKey, new: &AccountKey) -> IdentityResult<()> {
        if old == new {
            return Err(IdentityError::validation(format!(
                "cannot rebind {old} onto itself"
            )));
        }

        let record = self.store.load(old).await?;

        let pending = PendingRebind {
            record,
            old_key: old.clone(),
            new_key: new.clone(),
            window: self.window,
            store: self.store.clone(),
            escalations: self.escalations.clone(),
            metrics: self.metrics.clone(),
        };

        self.registry
            .stage(self.pending_key(new), pending, self.window)
            .await;
        self.metrics.rebind_requested();

        info!(
            "Rebind {old} -> {new} staged, awaiting login within {:?}",
            self.window
        );
        Ok(())
    }

    /// Login hook: confirm a pending rebind, if any.
    ///
    /// With `identity` the rebind staged for exactly that key is confirmed.
    /// Without it the oldest pending rebind is. Returns whether one was found.
    pub async fn on_login_completed(&self, identity: Option<&AccountKey>) -> bool {
        let found = match identity {
            Some(key) => {
                self.registry
                    .complete_exact(&self.namespace, key.as_str())
                    .await
            }
            None => self.registry.complete_prefix(&self.namespace).await,
        };

        if !found {
            debug!("Login completed with no pending rebind");
        }
        found
    }

    pub async fn is_pending(&self, new: &AccountKey) -> bool {
        self.registry.is_pending(&self.pending_key(new)).await
    }

    pub async fn remaining(&self, new: &AccountKey) -> Option<Duration> {
        self.registry.remaining(&self.pending_key(new)).await
    }

    pub async fn pending_count(&self) -> usize {
        self.registry.len().await
    }

    pub fn escalations(&self) -> &EscalationQueue {
        &self.escalations
    }

    /// Drop every pending rebind without confirming or escalating it.
    pub async fn shutdown(&self) -> usize {
        self.registry.shutdown().await
    }

    fn pending_key(&self, new: &AccountKey) -> String {
        format!("{}{}", self.namespace, new)
    }
}
