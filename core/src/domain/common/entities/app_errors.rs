use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("analysis service unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("unexpected analysis service response: {0}")]
    ClassifierResponse(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("diet catalog error: {0}")]
    Catalog(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
