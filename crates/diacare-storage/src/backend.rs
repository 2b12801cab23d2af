use std::fmt;
use std::str::FromStr;

use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::memory::MemoryBackend;
use crate::{client, objects};

const JSON: &str = "application/json";

/// Parsed store connection string.
///
/// - `s3://bucket` or `s3://bucket/some/prefix`
/// - `memory://`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    S3 { bucket: String, prefix: String },
    Memory,
}

impl FromStr for StoreUrl {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "memory://" || s == "memory" {
            return Ok(StoreUrl::Memory);
        }

        let rest = s
            .strip_prefix("s3://")
            .ok_or_else(|| StorageError::InvalidUrl(format!("unsupported scheme in {s:?}")))?;
        let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(StorageError::InvalidUrl(format!("missing bucket in {s:?}")));
        }

        let prefix = prefix.trim_matches('/');
        let prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("{prefix}/")
        };

        Ok(StoreUrl::S3 {
            bucket: bucket.to_string(),
            prefix,
        })
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreUrl::S3 { bucket, prefix } => write!(f, "s3://{bucket}/{prefix}"),
            StoreUrl::Memory => f.write_str("memory://"),
        }
    }
}

/// Where documents live. Keys are the relative paths from `diacare_core::keys`.
#[derive(Clone)]
pub enum Backend {
    S3 {
        client: Client,
        bucket: String,
        prefix: String,
    },
    Memory(MemoryBackend),
}

impl Backend {
    pub async fn connect(url: &StoreUrl) -> Self {
        match url {
            StoreUrl::S3 { bucket, prefix } => Backend::S3 {
                client: client::build_client().await,
                bucket: bucket.clone(),
                prefix: prefix.clone(),
            },
            StoreUrl::Memory => Backend::Memory(MemoryBackend::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self {
            Backend::S3 {
                client,
                bucket,
                prefix,
            } => objects::get_object(client, bucket, &format!("{prefix}{key}"))
                .await
                .map_err(|e| relative_key(e, prefix)),
            Backend::Memory(memory) => memory.get(key).await,
        }
    }

    pub async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        match self {
            Backend::S3 {
                client,
                bucket,
                prefix,
            } => objects::put_object(client, bucket, &format!("{prefix}{key}"), body, Some(JSON)).await,
            Backend::Memory(memory) => {
                memory.put(key, body).await;
                Ok(())
            }
        }
    }

    /// Create-only write; fails with `AlreadyExists` if the key is taken.
    pub async fn put_if_absent(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        match self {
            Backend::S3 {
                client,
                bucket,
                prefix,
            } => objects::put_object_if_absent(
                client,
                bucket,
                &format!("{prefix}{key}"),
                body,
                Some(JSON),
            )
            .await
            .map_err(|e| relative_key(e, prefix)),
            Backend::Memory(memory) => memory.put_if_absent(key, body).await,
        }
    }
}

fn relative_key(err: StorageError, prefix: &str) -> StorageError {
    match err {
        StorageError::NotFound { key } => StorageError::NotFound {
            key: key.strip_prefix(prefix).unwrap_or(&key).to_string(),
        },
        StorageError::AlreadyExists { key } => StorageError::AlreadyExists {
            key: key.strip_prefix(prefix).unwrap_or(&key).to_string(),
        },
        other => other,
    }
}
