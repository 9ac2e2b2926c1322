use crate::StoreResult;

use async_trait::async_trait;

/// Durable namespaced key-value storage.
#[async_trait]
pub trait RecordBackend: Send + Sync {
    /// Returns `None` when nothing is stored at `namespace/key`.
    async fn load(&self, namespace: &str, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Inserts or overwrites.
    async fn save(&self, namespace: &str, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Deleting a missing key is not an error.
    async fn delete(&self, namespace: &str, key: &str) -> StoreResult<()>;
}
