use crate::utils::error::{CheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Rejects a declared array size before anything is allocated for it.
pub fn validate_array_size(size: i64, limit: usize) -> Result<usize> {
    if size < 0 {
        return Err(CheckError::NegativeSize(size));
    }
    let size = usize::try_from(size).map_err(|_| CheckError::SizeLimitExceeded {
        size: usize::MAX,
        limit,
    })?;
    if size > limit {
        return Err(CheckError::SizeLimitExceeded { size, limit });
    }
    Ok(size)
}
