use crate::{
    error::Result,
    models::UrlRecord,
    shortcode::{self, ShortCode},
    store::{MemoryStore, UrlStore},
};
use chrono::Utc;
use std::sync::Arc;

/// Creates and resolves short links on top of a [`UrlStore`].
#[derive(Clone)]
pub struct UrlService {
    store: Arc<dyn UrlStore>,
}

impl UrlService {
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }

    /// Service over a fresh, empty [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Derive the code for `original_url` and store the record under it.
    ///
    /// The URL is kept verbatim. Shortening the same URL again replaces the
    /// record and resets its creation date.
    pub async fn shorten(&self, original_url: &str) -> ShortCode {
        let code = shortcode::generate(original_url);
        let record = UrlRecord {
            id: code.to_string(),
            original_url: original_url.to_owned(),
            short_url: code.to_string(),
            creation_date: Utc::now(),
        };

        self.store.put(&code, record).await;
        tracing::debug!(
            "Shortened '{}' to '{}' ({} stored)",
            original_url,
            code,
            self.store.len()
        );

        code
    }

    /// Original URL for `code`, or `Error::NotFound`.
    pub async fn resolve(&self, code: &ShortCode) -> Result<String> {
        self.record(code).await.map(|record| record.original_url)
    }

    /// Full stored record for `code`.
    pub async fn record(&self, code: &ShortCode) -> Result<UrlRecord> {
        self.store.get(code).await
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn UrlStore {
        self.store.as_ref()
    }
}
