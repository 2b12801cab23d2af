use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StorageError;

/// In-process document backend. Cloning shares the same map.
///
/// Nothing survives a restart; this is for local runs and tests.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    objects: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    pub async fn put(&self, key: &str, body: Vec<u8>) {
        self.objects.write().await.insert(key.to_string(), body);
    }

    pub async fn put_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let mut objects = self.objects.write().await;
        if objects.contains_key(key) {
            return Err(StorageError::AlreadyExists {
                key: key.to_string(),
            });
        }
        objects.insert(key.to_string(), body);
        Ok(())
    }

    /// Keys under `prefix`, in order. Lets tests inspect what was written.
    pub async fn list(&self, prefix: &str) -> Vec<String> {
        self.objects
            .read()
            .await
            .range(prefix.to_string()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(prefix))
            .cloned()
            .collect()
    }
}
