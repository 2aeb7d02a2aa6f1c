use crate::{error::Result, shortcode::ShortCode, AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /redirect/:id
///
/// 302 to the stored URL, or 404 "Invalid request" for an unknown code.
/// `Redirect::to` answers 303, so the response is built by hand.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let original_url = state.service.resolve(&ShortCode::new_unchecked(id)).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location(&original_url))]).into_response())
}

/// Header-safe form of a stored URL. CR and LF become spaces; any other
/// control byte is percent-encoded. Everything else passes through.
fn location(url: &str) -> HeaderValue {
    let mut bytes = Vec::with_capacity(url.len());
    for &b in url.as_bytes() {
        match b {
            b'\r' | b'\n' => bytes.push(b' '),
            b'\t' => bytes.push(b),
            0x00..=0x1f | 0x7f => bytes.extend_from_slice(format!("%{:02X}", b).as_bytes()),
            _ => bytes.push(b),
        }
    }

    // Only visible ASCII, tab, space and obs-text are left at this point.
    HeaderValue::from_bytes(&bytes).unwrap_or_else(|_| HeaderValue::from_static("/"))
}
