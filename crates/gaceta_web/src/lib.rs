use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use gaceta_core::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route(
            "/api/articles",
            get(handlers::list_articles).post(handlers::create_article),
        )
        .route(
            "/api/articles/:slug",
            get(handlers::get_article).delete(handlers::delete_article),
        )
        .route("/api/refresh", post(handlers::refresh))
        .route("/api/status", get(handlers::status))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds the listener and serves the API until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌐 Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use gaceta_core::{Article, Error, Result};
}
