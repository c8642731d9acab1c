use crate::utils::error::{GroupError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(GroupError::InvalidConfiguration {
            message: format!("{} must be at least {}, got {}", field_name, min_value, value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GroupError::InvalidConfiguration {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
