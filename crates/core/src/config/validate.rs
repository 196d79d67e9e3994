use super::{types::Config, ConfigError};

/// Validates a loaded configuration before any worker is started.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_extension("naming.source_ext", &config.naming.source_ext)?;
    validate_extension("naming.target_ext", &config.naming.target_ext)?;

    if config.naming.source_ext == config.naming.target_ext {
        return Err(ConfigError::ValidationError(format!(
            "naming.source_ext and naming.target_ext are both \"{}\"; converting a file onto itself is not supported",
            config.naming.source_ext
        )));
    }

    Ok(())
}

fn validate_extension(field: &str, ext: &str) -> Result<(), ConfigError> {
    if ext.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{field} must not be empty"
        )));
    }
    if ext.starts_with('.') {
        return Err(ConfigError::ValidationError(format!(
            "{field} must be written without a leading dot (got \"{ext}\")"
        )));
    }
    if ext.contains('/') || ext.contains(std::path::MAIN_SEPARATOR) {
        return Err(ConfigError::ValidationError(format!(
            "{field} must not contain path separators (got \"{ext}\")"
        )));
    }
    Ok(())
}
