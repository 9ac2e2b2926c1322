use crate::{RecordBackend, StoreResult};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process backend. Contents are lost when the last clone is dropped.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<RwLock<HashMap<(String, String), Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl RecordBackend for MemoryBackend {
    async fn load(&self, namespace: &str, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let inner = self.inner.read().await;
        Ok(inner
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    async fn save(&self, namespace: &str, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.insert((namespace.to_string(), key.to_string()), value.to_vec());
        Ok(())
    }

    async fn delete(&self, namespace: &str, key: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }
}
