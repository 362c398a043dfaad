use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SorterError>;

impl SorterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SorterError::IoError(e) => format!("File operation failed: {}", e),
            SorterError::ValidationError { message } => {
                format!("Name list rejected: {}", message)
            }
            SorterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SorterError::IoError(_) => {
                "Check that the input file exists and the output destination is writable"
            }
            SorterError::ValidationError { .. } => {
                "Ensure every name has at least one given name and a last name"
            }
            SorterError::InvalidConfigValueError { .. } => {
                "Review the command line options and try again"
            }
        }
    }
}
