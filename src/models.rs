use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL as kept in the store.
///
/// `short_url` always equals `id`: the short code doubles as the record key.
#[derive(Debug, Clone, Serialize)]
pub struct UrlRecord {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub creation_date: DateTime<Utc>,
}
