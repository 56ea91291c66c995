//! Error handling module for the users client.
//!
//! Provides the failure taxonomy for API calls and the total mapping from any
//! failure to a user-facing display message.

/// Failure of an API call.
///
/// Every failure a call can produce lands in exactly one variant; the
/// classification never falls through unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Host not resolvable or no network route
    NetworkUnreachable,
    /// Connection timed out
    Timeout,
    /// HTTP-layer error carrying the response status code
    Http(u16),
    /// Anything else, with an optional description
    Other(Option<String>),
}

impl ApiError {
    /// Build an `Other` error, treating an empty description as absent.
    pub fn other(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.is_empty() {
            ApiError::Other(None)
        } else {
            ApiError::Other(Some(description))
        }
    }

    /// The user-facing message for this failure.
    ///
    /// Total over all variants; empty descriptions fall back to the bare
    /// `"Error"` message.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::NetworkUnreachable => "Are you connected to the Internet?".to_string(),
            ApiError::Timeout => "Can't connect to server".to_string(),
            ApiError::Http(code) => format!("Something wrong with server ({})", code),
            ApiError::Other(Some(description)) if !description.is_empty() => {
                format!("Error: {}", description)
            }
            ApiError::Other(_) => "Error".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NetworkUnreachable => write!(f, "network unreachable"),
            ApiError::Timeout => write!(f, "connection timed out"),
            ApiError::Http(code) => write!(f, "server returned status {}", code),
            ApiError::Other(Some(description)) => write!(f, "{}", description),
            ApiError::Other(None) => write!(f, "unknown error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            // DNS failures and unreachable hosts surface as connect errors
            ApiError::NetworkUnreachable
        } else if let Some(status) = err.status() {
            ApiError::Http(status.as_u16())
        } else {
            ApiError::other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::other(format!("JSON error: {}", err))
    }
}
