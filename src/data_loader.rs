use std::path::Path;
use tracing::debug;

use crate::chart::ImportanceData;
use crate::errors::ModelboardError;

/// Loads a `label,value` CSV into importance data, preserving row order.
///
/// Used by offline `render` runs that have an importance table but no
/// full model artifact.
pub fn load_importances_csv(path: &Path) -> Result<ImportanceData, ModelboardError> {
    let mut reader = csv::Reader::from_path(path)?;
    verify_importance_columns(reader.headers()?)?;

    let mut data = ImportanceData::default();
    for record in reader.records() {
        let record = record?;
        let label = record.get(0).unwrap_or("").to_string();
        let raw_value = record.get(1).unwrap_or("");
        let value: f64 = raw_value.trim().parse().map_err(|_| {
            ModelboardError::ParseError(format!(
                "value '{}' for label '{}' is not a number",
                raw_value, label
            ))
        })?;
        data.labels.push(label);
        data.values.push(value);
    }

    debug!("Loaded {} importance rows from CSV", data.labels.len());
    Ok(data)
}

fn verify_importance_columns(headers: &csv::StringRecord) -> Result<(), ModelboardError> {
    let columns: Vec<&str> = headers.iter().collect();
    for required in ["label", "value"] {
        if !columns.contains(&required) {
            return Err(ModelboardError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}
