use serde_json::json;

use crate::chart::{ChartContainer, ChartSpec};
use crate::config::DashboardConfig;
use crate::errors::ModelboardError;

/// Renders the dashboard page. When no chart spec was produced the page
/// still renders, with an empty chart section instead of a script.
pub fn render(
    config: &DashboardConfig,
    spec: Option<&ChartSpec>,
) -> Result<String, ModelboardError> {
    let chart_script = match spec {
        Some(spec) => {
            let container = ChartContainer::new(&config.container_id);
            Some(super::to_chart_script::render(&container, spec)?)
        }
        None => None,
    };

    super::renderer::render_template(
        &get_template(),
        &json!({
            "title": config.title,
            "container_id": config.container_id,
            "chart_script": chart_script,
        }),
    )
}

pub fn get_template() -> String {
    include_str!("to_dashboard.hbs").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartSpec;

    #[test]
    fn dashboard_embeds_chart_when_spec_present() {
        let config = DashboardConfig::default();
        let spec = ChartSpec::bar(vec!["Attack".to_string()], vec![0.4]);
        let page = render(&config, Some(&spec)).unwrap();

        assert!(page.contains(r#"<canvas id="importanceChart">"#));
        assert!(page.contains("new Chart(el, "));
        assert!(page.contains("Attack"));
    }

    #[test]
    fn dashboard_renders_empty_section_without_spec() {
        let config = DashboardConfig::default();
        let page = render(&config, None).unwrap();

        assert!(!page.contains("new Chart"));
        assert!(page.contains("No importance data"));
    }

    #[test]
    fn dashboard_uses_configured_title_and_container() {
        let config = DashboardConfig {
            title: "Legendary classifier".to_string(),
            container_id: "topFeatures".to_string(),
            ..DashboardConfig::default()
        };
        let spec = ChartSpec::bar(vec![], vec![]);
        let page = render(&config, Some(&spec)).unwrap();

        assert!(page.contains("Legendary classifier"));
        assert!(page.contains(r#"<canvas id="topFeatures">"#));
        assert!(page.contains(r#"document.getElementById("topFeatures")"#));
    }
}
