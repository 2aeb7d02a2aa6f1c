use crate::{
    error::{Error, Result},
    models::UrlRecord,
    shortcode::ShortCode,
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Key-value storage for URL records, keyed by short code.
///
/// Handlers only ever see this trait through [`crate::service::UrlService`],
/// so the in-memory map can be replaced without touching the HTTP layer.
#[async_trait]
pub trait UrlStore: Send + Sync + 'static {
    /// Insert a record, replacing whatever was stored under `code`.
    async fn put(&self, code: &ShortCode, record: UrlRecord);

    /// Exact-key lookup. A miss is `Error::NotFound`.
    async fn get(&self, code: &ShortCode) -> Result<UrlRecord>;

    /// Number of records currently stored.
    fn len(&self) -> usize;
}

/// Process-lifetime store backed by a DashMap.
///
/// Reads and writes lock only the shard holding the key, so concurrent
/// requests never see a half-written record. Nothing is evicted or persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<String, UrlRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn put(&self, code: &ShortCode, record: UrlRecord) {
        self.inner.insert(code.as_str().to_owned(), record);
    }

    async fn get(&self, code: &ShortCode) -> Result<UrlRecord> {
        self.inner
            .get(code.as_str())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(code.to_string()))
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(code: &str, url: &str) -> UrlRecord {
        UrlRecord {
            id: code.to_owned(),
            original_url: url.to_owned(),
            short_url: code.to_owned(),
            creation_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn put_and_get() {
        let store = MemoryStore::new();

        store
            .put(&code("abc12345"), record("abc12345", "https://example.com"))
            .await;

        let found = store.get(&code("abc12345")).await.unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert_eq!(found.short_url, "abc12345");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryStore::new();

        let err = store.get(&code("deadbeef")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref c) if c == "deadbeef"));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn put_overwrites_existing_key() {
        let store = MemoryStore::new();

        store
            .put(&code("abc12345"), record("abc12345", "https://old.test"))
            .await;
        store
            .put(&code("abc12345"), record("abc12345", "https://new.test"))
            .await;

        let found = store.get(&code("abc12345")).await.unwrap();
        assert_eq!(found.original_url, "https://new.test");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn lookup_is_exact() {
        let store = MemoryStore::new();

        store
            .put(&code("abc12345"), record("abc12345", "https://example.com"))
            .await;

        assert!(store.get(&code("abc1234")).await.is_err());
        assert!(store.get(&code("ABC12345")).await.is_err());
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = MemoryStore::new();
        let mut handles = vec![];

        for i in 0..16u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let c = format!("code{:04}", i);
                store
                    .put(&code(&c), record(&c, &format!("https://example{}.com", i)))
                    .await;
                let _ = store.get(&code(&c)).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 16);
        for i in 0..16u32 {
            let found = store.get(&code(&format!("code{:04}", i))).await.unwrap();
            assert_eq!(found.original_url, format!("https://example{}.com", i));
        }
    }
}
