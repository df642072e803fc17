use serde::Serialize;
use std::fmt;

/// A pre-network form validation failure from the payload builders.
///
/// Carries an enumerable reason so the caller can render one message and
/// skip the network call entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// A required field for the current mode is absent or blank
    MissingField { field: &'static str },
    /// A present field does not satisfy its format rule
    InvalidFormat {
        field: &'static str,
        rule: &'static str,
    },
}

impl ValidationError {
    /// The wire-format name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ValidationError::InvalidFormat { field, rule } => {
                write!(f, "{} must be {}", field, rule)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Application error types for better error handling and user feedback.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum AppError {
    /// Client-side validation failures; no request was issued
    Validation(ValidationError),
    /// Network or backend failures, carrying the backend `message` verbatim
    /// when one was returned
    Request(String),
    /// Errors reading or writing the persisted session file
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Request(msg) => write!(f, "{}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

// Conversion to String for UI-facing return types
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

// Convenience constructors
impl AppError {
    pub fn request<S: Into<String>>(msg: S) -> Self {
        AppError::Request(msg.into())
    }

    pub fn storage<S: Into<String>>(msg: S) -> Self {
        AppError::Storage(msg.into())
    }
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
