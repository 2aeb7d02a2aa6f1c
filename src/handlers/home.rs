use crate::error::Result;
use askama::Template;
use axum::response::Html;

// ── Template structs ───────────────────────────────────────────────────────

/// A freshly created short link, as shown under the form.
pub struct ShortLink {
    pub short_url: String,
    pub base_url: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub link: Option<ShortLink>,
}

impl IndexTemplate {
    /// Render the page, surfacing template failures as `Error::Template`.
    pub fn page(self) -> Result<Html<String>> {
        Ok(Html(self.render()?))
    }
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// GET /
pub async fn index() -> Result<Html<String>> {
    IndexTemplate { link: None }.page()
}
