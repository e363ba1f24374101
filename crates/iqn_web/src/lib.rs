use axum::{routing::get, Router};
use iqn_core::Result;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    // The front end is served separately, so the API stays wide open.
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::news))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use super::AppState;
    pub use iqn_core::{ArticleRecord, Error, Result};
}
