use serde_json::json;

use crate::chart::{ChartContainer, ChartSpec};
use crate::errors::ModelboardError;

/// Renders the inline initializer script for one chart.
///
/// The script keeps its own guard on the container lookup so a page that
/// dropped the chart section stays a no-op at evaluation time; whether a
/// spec exists at all was already decided server-side by
/// `chart::initialize`.
pub fn render(container: &ChartContainer, spec: &ChartSpec) -> Result<String, ModelboardError> {
    super::renderer::render_template(
        &get_template(),
        &json!({
            "container_id": container.element_id,
            "spec": spec,
        }),
    )
}

pub fn get_template() -> String {
    let template = r##"(function () {
  const el = document.getElementById("{{container_id}}");
  if (!el) return;

  new Chart(el, {{{json spec}}});
})();
"##;

    template.to_string()
}
