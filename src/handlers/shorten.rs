use crate::{
    error::{Error, Result},
    handlers::home::{IndexTemplate, ShortLink},
    AppState,
};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{Form, FromRequest, Multipart, Query, Request, State},
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Request / response shapes ──────────────────────────────────────────────

#[derive(Deserialize, Default)]
struct UrlParam {
    url: Option<String>,
}

#[derive(Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub base_url: String,
}

/// A URL to shorten, tagged with how the client sent it. Form posts get the
/// HTML page back, everything else gets JSON.
#[derive(Debug, PartialEq, Eq)]
pub enum ShortenRequest {
    Form(String),
    Json(String),
}

#[async_trait]
impl<S> FromRequest<S> for ShortenRequest
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        if req.method() == Method::POST {
            // A `url` query parameter is used when the form body lacks one.
            let query_url = Query::<UrlParam>::try_from_uri(req.uri())
                .ok()
                .and_then(|Query(param)| param.url);

            let mime = content_type(req.headers()).unwrap_or_default().to_owned();

            if mime.starts_with("application/x-www-form-urlencoded") {
                let Form(param) = Form::<UrlParam>::from_request(req, state)
                    .await
                    .map_err(|e| Error::InvalidBody(e.body_text()))?;
                let url = param.url.or(query_url).unwrap_or_default();
                return Ok(Self::Form(url));
            }

            if mime.starts_with("multipart/form-data") {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| Error::InvalidBody(e.body_text()))?;
                let url = multipart_url(multipart).await?.or(query_url);
                return Ok(Self::Form(url.unwrap_or_default()));
            }
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::InvalidBody(e.body_text()))?;
        // A bare `null` body counts as an object without `url`.
        let param: Option<UrlParam> =
            serde_json::from_slice(&body).map_err(|e| Error::InvalidBody(e.to_string()))?;

        Ok(Self::Json(param.and_then(|p| p.url).unwrap_or_default()))
    }
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// GET|POST /shorten
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    request: ShortenRequest,
) -> Result<Response> {
    let base_url = base_url(&headers, &uri);

    match request {
        ShortenRequest::Form(url) => {
            let code = state.service.shorten(&url).await;
            let page = IndexTemplate {
                link: Some(ShortLink {
                    short_url: code.into(),
                    base_url,
                }),
            }
            .page()?;
            Ok(page.into_response())
        }
        ShortenRequest::Json(url) => {
            let code = state.service.shorten(&url).await;
            Ok(Json(ShortenResponse {
                short_url: code.into(),
                base_url,
            })
            .into_response())
        }
    }
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

/// First `url` field of a multipart form, if any.
async fn multipart_url(mut multipart: Multipart) -> Result<Option<String>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidBody(e.body_text()))?
    {
        if field.name() == Some("url") {
            let value = field
                .text()
                .await
                .map_err(|e| Error::InvalidBody(e.body_text()))?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// `<scheme>://<host>` as seen by the client.
///
/// The listener speaks plain HTTP, so the scheme is `http` unless a proxy in
/// front says otherwise via `X-Forwarded-Proto`. The host is the Host header,
/// or the URI authority for HTTP/2 requests that carry none; empty otherwise.
fn base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("");

    format!("{scheme}://{host}")
}
