use crate::domain::model::PersonName;
use crate::domain::ports::NameValidator;
use crate::utils::error::{Result, SorterError};

/// Rejects a batch if any record has a blank last name or no given names.
/// Fails on the first offender; the error carries a fixed message rather
/// than identifying the record.
pub struct PersonNameValidator;

impl NameValidator for PersonNameValidator {
    fn validate(&self, names: &[PersonName]) -> Result<()> {
        for name in names {
            if name.last_name.trim().is_empty() || name.given_names.is_empty() {
                return Err(SorterError::ValidationError {
                    message: "Invalid name format".to_string(),
                });
            }
        }
        Ok(())
    }
}
