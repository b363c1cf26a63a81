use routedeck_client::ApiError;
use std::fmt;

/// Result type for routedeck-app operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Client-side field check that failed before any remote call was made.
///
/// Always local and non-fatal: it blocks submission, is displayed inline on
/// the form, and leaves the edit session open with the entered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is missing or blank
    NameRequired,
    /// A numeric form field did not parse as a number
    NotANumber { field: &'static str },
    /// Distance below the minimum of 2
    DistanceTooSmall,
    /// Rating below the minimum of 1
    RatingTooSmall,
}

impl ValidationError {
    /// Form field the message belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name",
            ValidationError::NotANumber { field } => field,
            ValidationError::DistanceTooSmall => "distance",
            ValidationError::RatingTooSmall => "rating",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "Name is required"),
            ValidationError::NotANumber { field } => write!(f, "{} must be a number", field),
            ValidationError::DistanceTooSmall => write!(f, "Distance must be >= 2"),
            ValidationError::RatingTooSmall => write!(f, "Rating must be >= 1"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Error types that can occur in the app layer
#[derive(Debug)]
pub enum AppError {
    /// Remote call failed
    Api(ApiError),

    /// Client-side form validation failed
    Validation(ValidationError),

    /// Configuration file error
    Config(String),

    /// Invalid operation or state
    InvalidOperation(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(err) => write!(f, "{}", err),
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            AppError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Config(_) | AppError::InvalidOperation(_) => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
