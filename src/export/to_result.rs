use indexmap::IndexMap;
use serde_json::json;

use crate::errors::ModelboardError;

/// Renders the prediction result page, including every model input the
/// feature builder assembled.
pub fn render(
    title: &str,
    prediction: bool,
    probability: f64,
    inputs: &IndexMap<String, f64>,
) -> Result<String, ModelboardError> {
    let rows: Vec<_> = inputs
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    super::renderer::render_template(
        &get_template(),
        &json!({
            "title": title,
            "prediction": prediction,
            "probability": probability,
            "inputs": rows,
        }),
    )
}

pub fn get_template() -> String {
    include_str!("to_result.hbs").to_string()
}
