use crate::{RecordBackend, StoreError, StoreResult};

use iv_core::{AccountKey, IDENTITY_NAMESPACE, IdentityRecord};

use std::sync::Arc;

use log::debug;

/// Load/save/delete of identity records by account key.
///
/// No retries or caching; backend failures reach the caller as-is.
#[derive(Clone)]
pub struct IdentityStore {
    backend: Arc<dyn RecordBackend>,
}

impl IdentityStore {
    pub fn new(backend: Arc<dyn RecordBackend>) -> Self {
        Self { backend }
    }

    pub async fn load(&self, key: &AccountKey) -> StoreResult<IdentityRecord> {
        let bytes = self
            .backend
            .load(IDENTITY_NAMESPACE, key.as_str())
            .await?
            .ok_or_else(|| StoreError::not_found(IDENTITY_NAMESPACE, key.as_str()))?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn save(&self, key: &AccountKey, record: &IdentityRecord) -> StoreResult<()> {
        let bytes = serde_json::to_vec(record)?;
        self.backend
            .save(IDENTITY_NAMESPACE, key.as_str(), &bytes)
            .await?;
        debug!("Saved identity record {key} (self_id {})", record.self_id);
        Ok(())
    }

    pub async fn delete(&self, key: &AccountKey) -> StoreResult<()> {
        self.backend.delete(IDENTITY_NAMESPACE, key.as_str()).await?;
        debug!("Deleted identity record {key}");
        Ok(())
    }
}
