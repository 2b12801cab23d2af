use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Get an object's body from S3.
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(body)
}

/// Put an object to S3, replacing whatever was there.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
) -> Result<(), StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body));

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    req.send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    Ok(())
}

/// Put an object only if the key does not exist yet (`If-None-Match: *`).
/// Returns `StorageError::AlreadyExists` when another writer got there first.
pub async fn put_object_if_absent(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: Option<&str>,
) -> Result<(), StorageError> {
    let mut req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(body))
        .if_none_match("*");

    if let Some(ct) = content_type {
        req = req.content_type(ct);
    }

    req.send().await.map_err(|e| {
        let err = e.into_service_error();
        // 412 when the key exists, 409 when a concurrent conditional write is in flight
        match err.code() {
            Some("PreconditionFailed") | Some("ConditionalRequestConflict") => {
                StorageError::AlreadyExists {
                    key: key.to_string(),
                }
            }
            _ => StorageError::PutObject(err.to_string()),
        }
    })?;

    Ok(())
}
