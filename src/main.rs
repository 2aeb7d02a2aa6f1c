use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod models;
mod service;
mod shortcode;
mod store;

use service::UrlService;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub service: UrlService,
}

impl AppState {
    pub fn new(service: UrlService) -> Self {
        Self { service }
    }
}

// ── Router ─────────────────────────────────────────────────────────────────

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(|| async { axum::http::StatusCode::OK }))
        .route(
            "/shorten",
            get(handlers::shorten::shorten).post(handlers::shorten::shorten),
        )
        .route("/redirect/:id", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real env vars take precedence
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shrtn=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::AppConfig::from_env()?;

    // Records live only as long as this process.
    let state = Arc::new(AppState::new(UrlService::in_memory()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
