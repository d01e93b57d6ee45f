use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::chart::ImportanceData;
use crate::errors::ModelboardError;

/// A trained binary classifier, exported to JSON by the training side.
///
/// `features` fixes the column order every prediction input must follow.
/// `importances` is optional; models trained without it still serve
/// predictions, only the dashboard chart goes dark.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ModelArtifact {
    pub name: String,
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default)]
    pub importances: Option<Vec<f64>>,
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self, ModelboardError> {
        let content = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        artifact.verify()?;
        debug!(
            "Loaded model artifact '{}' with {} features",
            artifact.name,
            artifact.features.len()
        );
        Ok(artifact)
    }

    pub fn verify(&self) -> Result<(), ModelboardError> {
        if self.features.is_empty() {
            return Err(ModelboardError::ArtifactInvalid(
                "artifact declares no features".to_string(),
            ));
        }
        if self.weights.len() != self.features.len() {
            return Err(ModelboardError::ArtifactInvalid(format!(
                "expected {} weights, found {}",
                self.features.len(),
                self.weights.len()
            )));
        }
        if let Some(importances) = &self.importances {
            // Tolerated, the importances are just ignored downstream.
            if importances.len() != self.features.len() {
                warn!(
                    "Importance vector length {} does not match {} features",
                    importances.len(),
                    self.features.len()
                );
            }
        }
        Ok(())
    }

    fn decision(&self, input: &[f64]) -> f64 {
        let dot: f64 = self
            .weights
            .iter()
            .zip(input.iter())
            .map(|(w, x)| w * x)
            .sum();
        dot + self.bias
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, input: &[f64]) -> f64 {
        1.0 / (1.0 + (-self.decision(input)).exp())
    }

    pub fn predict(&self, input: &[f64]) -> bool {
        self.predict_proba(input) >= 0.5
    }

    /// The `top_n` most important features, largest first, or `None` when
    /// the artifact carries no usable importance vector.
    pub fn top_importances(&self, top_n: usize) -> Option<ImportanceData> {
        let importances = self.importances.as_ref()?;
        if importances.len() != self.features.len() {
            return None;
        }

        let mut pairs: Vec<(&String, f64)> = self
            .features
            .iter()
            .zip(importances.iter().copied())
            .collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs.truncate(top_n);

        Some(ImportanceData {
            labels: pairs.iter().map(|(name, _)| (*name).clone()).collect(),
            values: pairs.iter().map(|(_, value)| *value).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            name: "test-model".to_string(),
            features: vec![
                "Attack".to_string(),
                "Defense".to_string(),
                "Speed".to_string(),
            ],
            weights: vec![0.8, -0.2, 0.5],
            bias: -1.0,
            importances: Some(vec![0.5, 0.1, 0.4]),
        }
    }

    #[test]
    fn test_deserialization() {
        let json = r#"
{
  "name": "legendary",
  "features": ["Attack", "Defense"],
  "weights": [0.4, 0.1],
  "bias": -2.0
}
"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.features.len(), 2);
        assert!(artifact.importances.is_none());
        artifact.verify().unwrap();
    }

    #[test]
    fn verify_rejects_weight_length_mismatch() {
        let mut artifact = artifact();
        artifact.weights.pop();
        assert!(artifact.verify().is_err());
    }

    #[test]
    fn predict_proba_is_a_probability_and_monotone() {
        let artifact = artifact();
        let low = artifact.predict_proba(&[0.0, 0.0, 0.0]);
        let high = artifact.predict_proba(&[10.0, 0.0, 10.0]);
        assert!((0.0..=1.0).contains(&low));
        assert!((0.0..=1.0).contains(&high));
        assert!(high > low);
    }

    #[test]
    fn predict_thresholds_at_half() {
        let artifact = artifact();
        assert!(!artifact.predict(&[0.0, 0.0, 0.0]));
        assert!(artifact.predict(&[10.0, 0.0, 10.0]));
    }

    #[test]
    fn top_importances_sorts_descending_and_truncates() {
        let artifact = artifact();
        let data = artifact.top_importances(2).unwrap();
        assert_eq!(data.labels, vec!["Attack", "Speed"]);
        assert_eq!(data.values, vec![0.5, 0.4]);
    }

    #[test]
    fn top_importances_absent_without_importance_vector() {
        let mut artifact = artifact();
        artifact.importances = None;
        assert!(artifact.top_importances(2).is_none());
    }

    #[test]
    fn top_importances_absent_on_length_mismatch() {
        let mut artifact = artifact();
        artifact.importances = Some(vec![0.5]);
        assert!(artifact.top_importances(2).is_none());
    }
}
