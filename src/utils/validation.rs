use crate::utils::error::{AreaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that an axis length lies in the documented domain: finite and non-negative.
pub fn validate_axis(field_name: &str, value: f64) -> Result<()> {
    let reason = if value.is_nan() {
        "Axis length is NaN"
    } else if value.is_infinite() {
        "Axis length must be finite"
    } else if value < 0.0 {
        "Axis length must not be negative"
    } else {
        return Ok(());
    };

    Err(AreaError::InvalidAxis {
        field: field_name.to_string(),
        value,
        reason: reason.to_string(),
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AreaError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
