use crate::infrastructure::http::controllers;
use crate::infrastructure::http::middleware::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/calculate", get(controllers::calculate::calculate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Business hours API is running. Use /calculate?days=&hours=&date= to compute a date."
}

async fn health_handler() -> &'static str {
    "OK"
}
