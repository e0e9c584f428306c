//! Router assembly and server loop

use super::{collections, stories};
use artisan_application::{DocumentStore, GenerateStoryUseCase, GenerationProgress};
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub stories: Arc<GenerateStoryUseCase>,
    pub store: Arc<dyn DocumentStore>,
    pub progress: Arc<dyn GenerationProgress>,
}

impl AppState {
    pub fn new(
        stories: GenerateStoryUseCase,
        store: Arc<dyn DocumentStore>,
        progress: Arc<dyn GenerationProgress>,
    ) -> Self {
        Self {
            stories: Arc::new(stories),
            store,
            progress,
        }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_home))
        .route("/health", get(health_check))
        .route("/stories/generate", post(stories::generate))
        .route("/stories/generate/", post(stories::generate))
        .route("/artisans/create", post(collections::create_artisan))
        .route("/artisans/create/", post(collections::create_artisan))
        .route(
            "/:collection/",
            get(collections::list).post(collections::create),
        )
        .route(
            "/:collection/:id/",
            get(collections::get)
                .put(collections::replace)
                .patch(collections::patch)
                .delete(collections::delete),
        )
        .with_state(state)
}

/// Serve `router` until the listener fails or `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "HTTP API listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn api_home() -> impl IntoResponse {
    Json(json!({
        "name": "artisan-story",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /health",
            "POST /stories/generate/",
            "POST /artisans/create/",
            "GET|POST /{collection}/",
            "GET|PUT|PATCH|DELETE /{collection}/{id}/",
        ],
        "collections": artisan_domain::CollectionName::ROUTED
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>(),
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
