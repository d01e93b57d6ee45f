pub mod to_chart_script;
pub mod to_dashboard;
pub mod to_index;
pub mod to_result;

/// Common rendering function used by all page and script renderers
/// This helps eliminate duplication across export modules
pub mod renderer {
    use crate::errors::ModelboardError;
    use serde_json::Value;

    /// Standard rendering function for template-based exports
    pub fn render_template(template: &str, context: &Value) -> Result<String, ModelboardError> {
        let handlebars = crate::common::get_handlebars();
        let res = handlebars.render_template(template, context)?;
        Ok(res)
    }
}
