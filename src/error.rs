use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("short code not found: {0}")]
    NotFound(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Template(#[from] askama::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound(code) => {
                tracing::debug!("Unknown short code '{}'", code);
                (StatusCode::NOT_FOUND, "Invalid request").into_response()
            }
            Error::InvalidBody(reason) => {
                tracing::debug!("Rejected shorten request: {}", reason);
                (StatusCode::BAD_REQUEST, "Invalid request body").into_response()
            }
            // The render error is passed through to the client as-is.
            Error::Template(e) => {
                tracing::error!("Template render failed: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
