use serde::{Deserialize, Serialize};

/// ## Structure
/// This module contains the data structures for the importance chart.
///
/// ```text
/// ChartSpec
///   ├── chart_type: "bar"
///   ├── data: ChartData
///   │   ├── labels: Vec<String>
///   │   └── datasets: Vec<Dataset>
///   │       ├── label: "Importance"
///   │       └── data: Vec<f64>
///   └── options: ChartOptions
///       ├── responsive: true
///       ├── plugins.legend.display: false
///       └── scales.y.beginAtZero: true
/// ```
///
/// `ChartSpec` serializes to the exact constructor argument the client-side
/// charting library expects; nothing here draws pixels.

/// Validated label/value pairs, `labels[i]` names the category whose
/// magnitude is `values[i]`. Equal lengths are assumed, not enforced.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ImportanceData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Importance data as it arrives from outside: either field may be absent.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ImportancePayload {
    pub labels: Option<Vec<String>>,
    pub values: Option<Vec<f64>>,
}

impl From<ImportanceData> for ImportancePayload {
    fn from(data: ImportanceData) -> Self {
        ImportancePayload {
            labels: Some(data.labels),
            values: Some(data.values),
        }
    }
}

/// The page region designated to host the rendered chart.
#[derive(Clone, Debug)]
pub struct ChartContainer {
    pub element_id: String,
}

impl ChartContainer {
    pub fn new(element_id: impl Into<String>) -> Self {
        ChartContainer {
            element_id: element_id.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LegendOptions {
    pub display: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScaleOptions {
    pub y: AxisOptions,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AxisOptions {
    #[serde(rename = "beginAtZero")]
    pub begin_at_zero: bool,
}

impl ChartSpec {
    /// A bar chart with a single "Importance" series, legend off and the
    /// value axis anchored at zero.
    pub fn bar(labels: Vec<String>, values: Vec<f64>) -> Self {
        ChartSpec {
            chart_type: "bar".to_string(),
            data: ChartData {
                labels,
                datasets: vec![Dataset {
                    label: "Importance".to_string(),
                    data: values,
                }],
            },
            options: ChartOptions {
                responsive: true,
                plugins: PluginOptions {
                    legend: LegendOptions { display: false },
                },
                scales: ScaleOptions {
                    y: AxisOptions {
                        begin_at_zero: true,
                    },
                },
            },
        }
    }
}

/// Builds the rendering request for the importance chart, or declines.
///
/// Produces at most one `ChartSpec`. A missing container, a missing
/// payload, or a payload lacking either field is a silent no-op; the
/// chart section is conditionally present on some pages only and its
/// absence is normal.
pub fn initialize(
    container: Option<&ChartContainer>,
    payload: Option<&ImportancePayload>,
) -> Option<ChartSpec> {
    container?;

    let payload = payload?;
    let labels = payload.labels.as_ref()?;
    let values = payload.values.as_ref()?;

    Some(ChartSpec::bar(labels.clone(), values.clone()))
}
