use crate::utils::error::{Result, SantaError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects the first value that appears more than once.
pub fn validate_unique(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(SantaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn count_unique(values: &[String]) -> usize {
    values.iter().map(String::as_str).collect::<HashSet<_>>().len()
}
