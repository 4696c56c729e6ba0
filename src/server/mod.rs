//! HTTP front end: the form view at `/` and a small JSON API under `/api`.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::config::Config;
use crate::error::Result;

pub mod api;
pub mod routes;
pub mod static_files;
pub mod views;

pub fn build_router(config: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(routes::home).post(routes::submit))
        .route("/api/health", get(routes::health))
        .route("/api/keys", get(routes::keys))
        .route(
            "/api/progressions",
            get(routes::progressions_query).post(routes::progressions_body),
        );

    if let Some(service) = static_files::static_service(config) {
        router = router.nest_service(static_files::STATIC_PREFIX, service);
    }

    router
        .fallback(routes::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

pub async fn run_server(config: Config) -> Result<()> {
    let app = build_router(&config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("triadic server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("triadic server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
