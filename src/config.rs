use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ModelboardError;

/// ## Structure
/// This module contains the data structures for the configuration file.
///
/// ```text
/// AppConfig
///   ├── model: ModelConfig
///   │   └── path: String
///   ├── dashboard: DashboardConfig
///   │   ├── title: String
///   │   ├── top_n: usize
///   │   └── container_id: String
///   └── server: ServerConfig
///       ├── port: u16
///       └── cors_origin: Option<String>
/// ```
///

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModelConfig {
    pub path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_container_id")]
    pub container_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origin: Option<String>,
}

fn default_title() -> String {
    "Model dashboard".to_string()
}

fn default_top_n() -> usize {
    12
}

fn default_container_id() -> String {
    "importanceChart".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            path: "model.json".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: default_title(),
            top_n: default_top_n(),
            container_id: default_container_id(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
            cors_origin: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ModelboardError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("model"));
        assert!(yaml.contains("dashboard"));
        assert!(yaml.contains("server"));
    }

    #[test]
    fn test_deserialization() {
        let yaml = r#"
model:
  path: "models/legendary.json"
dashboard:
  title: "Legendary classifier"
  top_n: 8
server:
  port: 8080
  cors_origin: "http://localhost:5173"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.model.path, "models/legendary.json");
        assert_eq!(config.dashboard.top_n, 8);
        assert_eq!(config.dashboard.container_id, "importanceChart");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.server.cors_origin.as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let yaml = r#"
model:
  path: "model.json"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dashboard.top_n, 12);
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors_origin.is_none());
    }
}
