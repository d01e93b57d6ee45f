//! Structured error types for artifact loading, data import and page
//! rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelboardError {
    /// Model artifact failed structural verification
    #[error("Invalid model artifact: {0}")]
    ArtifactInvalid(String),

    /// Required column missing from an imported file
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A value could not be parsed as a number
    #[error("Parsing error: {0}")]
    ParseError(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
