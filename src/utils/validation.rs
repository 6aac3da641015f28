use crate::utils::error::{AgeGateError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgeGateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(AgeGateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unknown log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}
