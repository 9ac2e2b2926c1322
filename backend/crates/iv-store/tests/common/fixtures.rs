use iv_core::{AccountKey, IdentityRecord, SelfId, SymmetricKey};
use iv_store::{RecordBackend, StoreError, StoreResult};

use std::sync::Arc;

use async_trait::async_trait;

pub fn account(key: &str) -> AccountKey {
    AccountKey::new(key).unwrap()
}

pub fn test_record(token: &str) -> IdentityRecord {
    IdentityRecord::new(SelfId::derive(token), SymmetricKey::generate(32).unwrap())
}

/// Backend whose every call fails, for propagation tests.
struct FailingBackend;

#[async_trait]
impl RecordBackend for FailingBackend {
    async fn load(&self, _namespace: &str, _key: &str) -> StoreResult<Option<Vec<u8>>> {
        Err(StoreError::backend("load unavailable"))
    }

    async fn save(&self, _namespace: &str, _key: &str, _value: &[u8]) -> StoreResult<()> {
        Err(StoreError::backend("save unavailable"))
    }

    async fn delete(&self, _namespace: &str, _key: &str) -> StoreResult<()> {
        Err(StoreError::backend("delete unavailable"))
    }
}

pub fn failing_backend() -> Arc<dyn RecordBackend> {
    Arc::new(FailingBackend)
}
