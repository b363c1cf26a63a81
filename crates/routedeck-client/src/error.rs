use std::fmt;

/// Result type for routedeck-client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types that can occur when talking to the collection endpoint
#[derive(Debug)]
pub enum ApiError {
    /// The call could not complete (connection refused, timeout, DNS, ...)
    Network(reqwest::Error),

    /// The call completed with a non-success status
    Status { status: u16, body: String },

    /// Lookup by identifier returned nothing
    NotFound(i64),

    /// The response body could not be decoded
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(err) => write!(f, "Network error: {}", err),
            ApiError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "Request failed with status {}", status)
                } else {
                    write!(f, "Request failed with status {}: {}", status, body)
                }
            }
            ApiError::NotFound(id) => write!(f, "Route with id {} not found", id),
            ApiError::Parse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(err) => Some(err),
            ApiError::Status { .. } | ApiError::NotFound(_) | ApiError::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}
