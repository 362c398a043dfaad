use crate::utils::error::{Result, SorterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one value is required".to_string(),
        });
    }
    values
        .iter()
        .try_for_each(|value| validate_non_empty_string(field_name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "sorted-names-list.txt").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("sort_strategy", "merge").is_ok());
        assert!(validate_non_empty_string("sort_strategy", "   ").is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        let tags = vec!["console".to_string(), "file".to_string()];
        assert!(validate_non_empty_list("write_to", &tags).is_ok());
        assert!(validate_non_empty_list("write_to", &[]).is_err());
        assert!(validate_non_empty_list("write_to", &[" ".to_string()]).is_err());
    }
}
