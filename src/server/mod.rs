pub mod app;
pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::model::ModelArtifact;

pub async fn start_server(config: AppConfig) -> Result<()> {
    let artifact = ModelArtifact::load(Path::new(&config.model.path))?;
    info!(
        "Loaded model '{}' ({} features)",
        artifact.name,
        artifact.features.len()
    );

    let port = config.server.port;
    let cors_origin = config.server.cors_origin.clone();
    let state = app::AppState {
        model: Arc::new(artifact),
        dashboard: config.dashboard,
    };

    let app = app::create_app(state, cors_origin.as_deref())?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("Endpoints:");
    info!("  /health                     - Health check");
    info!("  /                           - Prediction form");
    info!("  /predict                    - Prediction (POST)");
    info!("  /dashboard                  - Feature importance dashboard");
    info!("  /api/v1/importances         - Importance payload (JSON)");
}
