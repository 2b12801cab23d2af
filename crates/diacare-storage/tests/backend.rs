use diacare_storage::backend::StoreUrl;
use diacare_storage::error::StorageError;
use diacare_storage::memory::MemoryBackend;

#[test]
fn parses_memory_url() {
    assert_eq!("memory://".parse::<StoreUrl>().unwrap(), StoreUrl::Memory);
}

#[test]
fn parses_s3_url_with_and_without_prefix() {
    assert_eq!(
        "s3://diacare".parse::<StoreUrl>().unwrap(),
        StoreUrl::S3 {
            bucket: "diacare".to_string(),
            prefix: String::new(),
        }
    );
    assert_eq!(
        "s3://diacare/staging/v1/".parse::<StoreUrl>().unwrap(),
        StoreUrl::S3 {
            bucket: "diacare".to_string(),
            prefix: "staging/v1/".to_string(),
        }
    );
}

#[test]
fn rejects_unknown_scheme_and_empty_bucket() {
    assert!(matches!(
        "mongodb://localhost/diacare".parse::<StoreUrl>(),
        Err(StorageError::InvalidUrl(_))
    ));
    assert!(matches!(
        "s3:///prefix".parse::<StoreUrl>(),
        Err(StorageError::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn memory_list_respects_prefix() {
    let memory = MemoryBackend::new();
    memory.put("a/1.json", b"{}".to_vec()).await;
    memory.put("a/2.json", b"{}".to_vec()).await;
    memory.put("ab/3.json", b"{}".to_vec()).await;
    memory.put("b/4.json", b"{}".to_vec()).await;

    assert_eq!(memory.list("a/").await, vec!["a/1.json", "a/2.json"]);
}

#[tokio::test]
async fn memory_put_if_absent_keeps_first_write() {
    let memory = MemoryBackend::new();
    memory.put_if_absent("k", b"first".to_vec()).await.unwrap();
    let err = memory.put_if_absent("k", b"second".to_vec()).await.unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists { .. }));
    assert_eq!(memory.get("k").await.unwrap(), b"first".to_vec());
}
