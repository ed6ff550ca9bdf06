use crate::domain::ports::ConfigProvider;
use crate::utils::error::{QuakeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Characters that would turn a host into something other than a host.
const HOST_DELIMITERS: &[char] = &['/', '?', '#', '@'];

pub fn validate_service(field_name: &str, service: &str) -> Result<()> {
    if service.trim().is_empty() {
        return Err(QuakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: service.to_string(),
            reason: "Service address cannot be empty".to_string(),
        });
    }

    if let Some(c) = service
        .chars()
        .find(|c| HOST_DELIMITERS.contains(c) || c.is_whitespace())
    {
        return Err(QuakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: service.to_string(),
            reason: format!("Expected host[:port], found '{}'", c),
        });
    }

    Ok(())
}

pub fn validate_magnitude(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(QuakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(QuakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not be negative, use 0 for no limit".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks shared by every configuration source.
pub fn validate_search_options<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_service("service", config.service())?;
    validate_magnitude("minmag", config.min_magnitude())?;
    validate_magnitude("maxmag", config.max_magnitude())?;
    validate_non_empty_string("type", config.event_type())?;
    validate_non_empty_string("status", config.evaluation_status())?;
    validate_non_empty_string("mode", config.evaluation_mode())?;
    Ok(())
}
