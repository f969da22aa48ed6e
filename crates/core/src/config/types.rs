use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON document
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

/// CSV output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where generated order sheets are written by default
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Whether the category column is included by default
    #[serde(default)]
    pub include_category: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            include_category: false,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("order_output.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid_config() {
        let toml = r#"
[catalog]
path = "/data/catalog.json"

[output]
path = "out.csv"
include_category = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.path.to_str().unwrap(), "/data/catalog.json");
        assert_eq!(config.output.path.to_str().unwrap(), "out.csv");
        assert!(config.output.include_category);
    }

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.path.to_str().unwrap(), "catalog.json");
        assert_eq!(config.output.path.to_str().unwrap(), "order_output.csv");
        assert!(!config.output.include_category);
    }

    #[test]
    fn test_deserialize_with_default_output() {
        let toml = r#"
[catalog]
path = "items.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.path.to_str().unwrap(), "items.json");
        assert_eq!(config.output.path.to_str().unwrap(), "order_output.csv");
    }

    #[test]
    fn test_default_matches_empty_toml() {
        let from_toml: Config = toml::from_str("").unwrap();
        let from_default = Config::default();
        assert_eq!(from_toml.catalog.path, from_default.catalog.path);
        assert_eq!(from_toml.output.path, from_default.output.path);
        assert_eq!(
            from_toml.output.include_category,
            from_default.output.include_category
        );
    }
}
