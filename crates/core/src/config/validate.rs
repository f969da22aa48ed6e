use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog path is not empty
/// - Output path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.catalog.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.path cannot be empty".to_string(),
        ));
    }

    if config.output.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "output.path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
