use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};
use tracing::{debug, error};

use crate::chart::{self, ChartContainer, ImportancePayload};
use crate::export::{to_dashboard, to_index, to_result};
use crate::features::{build_feature_vector, FormData};
use crate::server::app::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    to_index::render(&state.dashboard.title, None)
        .map(Html)
        .map_err(|err| {
            error!("Failed to render index page: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

pub async fn predict(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, StatusCode> {
    let form = FormData::from_pairs(pairs);
    let (vector, named) = build_feature_vector(&form, &state.model.features);

    let probability = state.model.predict_proba(&vector);
    let prediction = state.model.predict(&vector);
    debug!(
        "Prediction: {} (p={:.4}) over {} inputs",
        prediction,
        probability,
        vector.len()
    );

    match to_result::render(&state.dashboard.title, prediction, probability, &named) {
        Ok(page) => Ok(Html(page)),
        Err(err) => {
            // Flash back to the form rather than a bare error page.
            error!("Failed to render result page: {}", err);
            let flash = format!("Prediction error: {}", err);
            to_index::render(&state.dashboard.title, Some(&flash))
                .map(Html)
                .map_err(|err| {
                    error!("Failed to render index page: {}", err);
                    StatusCode::INTERNAL_SERVER_ERROR
                })
        }
    }
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let payload = state
        .model
        .top_importances(state.dashboard.top_n)
        .map(ImportancePayload::from);
    let container = ChartContainer::new(&state.dashboard.container_id);

    // Declining to chart is the normal path for models without
    // importances; the page renders either way.
    let spec = chart::initialize(Some(&container), payload.as_ref());

    to_dashboard::render(&state.dashboard, spec.as_ref())
        .map(Html)
        .map_err(|err| {
            error!("Failed to render dashboard page: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
