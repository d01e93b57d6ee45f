use axum::{extract::State, http::StatusCode, response::Json};

use crate::chart::ImportancePayload;
use crate::server::app::AppState;

/// The raw payload a page script could fetch instead of reading inlined
/// data. Both fields are null when the model carries no importances;
/// consumers are expected to treat that as "no chart", not as an error.
pub async fn get_importances(
    State(state): State<AppState>,
) -> Result<Json<ImportancePayload>, StatusCode> {
    let payload = state
        .model
        .top_importances(state.dashboard.top_n)
        .map(ImportancePayload::from)
        .unwrap_or_default();

    Ok(Json(payload))
}
