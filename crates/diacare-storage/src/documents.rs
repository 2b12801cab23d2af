use serde::{de::DeserializeOwned, Serialize};

use crate::backend::Backend;
use crate::error::StorageError;

/// Load a JSON document.
pub async fn load_document<T: DeserializeOwned>(
    backend: &Backend,
    key: &str,
) -> Result<T, StorageError> {
    let body = backend.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON document, mapping a missing key to `None`.
pub async fn find_document<T: DeserializeOwned>(
    backend: &Backend,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_document(backend, key).await {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document, replacing any previous version.
pub async fn save_document<T: Serialize>(
    backend: &Backend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    backend.put(key, body).await
}

/// Save a JSON document only if the key is free.
pub async fn create_document<T: Serialize>(
    backend: &Backend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    backend.put_if_absent(key, body).await
}
