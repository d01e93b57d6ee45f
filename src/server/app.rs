use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{health, importances, pages};
use crate::config::DashboardConfig;
use crate::model::ModelArtifact;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelArtifact>,
    pub dashboard: DashboardConfig,
}

pub fn create_app(state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Pages
        .route("/", get(pages::index))
        .route("/predict", post(pages::predict))
        .route("/dashboard", get(pages::dashboard))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/importances", get(importances::get_importances))
}
