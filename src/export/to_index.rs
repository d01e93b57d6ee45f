use serde_json::json;

use crate::errors::ModelboardError;
use crate::features::{COLOR_FEATURES, TYPE_FEATURES};

/// Renders the prediction form. `flash` carries an error banner from a
/// failed prediction attempt.
pub fn render(title: &str, flash: Option<&str>) -> Result<String, ModelboardError> {
    super::renderer::render_template(
        &get_template(),
        &json!({
            "title": title,
            "flash": flash,
            "types": TYPE_FEATURES,
            "colors": COLOR_FEATURES,
            "stats": [
                { "name": "Total", "default": 0 },
                { "name": "HP", "default": 0 },
                { "name": "Attack", "default": 0 },
                { "name": "Defense", "default": 0 },
                { "name": "Sp_Atk", "default": 0 },
                { "name": "Sp_Def", "default": 0 },
                { "name": "Speed", "default": 0 },
            ],
        }),
    )
}

pub fn get_template() -> String {
    include_str!("to_index.hbs").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_lists_stats_types_and_colors() {
        let page = render("Model dashboard", None).unwrap();
        assert!(page.contains(r#"name="Sp_Atk""#));
        assert!(page.contains(r#"value="Dragon""#));
        assert!(page.contains(r#"<option value="Purple">"#));
        assert!(page.contains(r#"action="/predict""#));
        assert!(!page.contains("class=\"flash\""));
    }

    #[test]
    fn flash_banner_renders_when_present() {
        let page = render("Model dashboard", Some("Prediction error: bad input")).unwrap();
        assert!(page.contains("class=\"flash\""));
        assert!(page.contains("Prediction error: bad input"));
    }
}
