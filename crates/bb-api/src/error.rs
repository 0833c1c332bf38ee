use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
const ACCESS_DENIED_MESSAGE: &str = "You do not have permission to access this resource.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401: the session is missing, invalid or expired
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// 403: the user's role may not use this resource
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected on the client before any request was sent
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Non-2xx response or an envelope with `success: false`
    #[error("Server error ({status}): {} {location}", server_text(.status, .message))]
    Server {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    /// No response reached the client
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP client error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthenticated(message: Option<String>) -> Self {
        ApiError::Unauthenticated {
            message: message.unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: Option<String>) -> Self {
        ApiError::Forbidden {
            message: message.unwrap_or_else(|| ACCESS_DENIED_MESSAGE.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(status: u16, message: Option<String>) -> Self {
        ApiError::Server {
            status,
            message: message.filter(|m| !m.is_empty()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Any failure to get a response: refused connection, timeout, broken body
    #[track_caller]
    pub fn network(err: reqwest::Error) -> Self {
        ApiError::Network {
            message: crate::NETWORK_ERROR_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ApiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn http(err: reqwest::Error) -> Self {
        ApiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::InvalidUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        ApiError::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Substitute an operation-specific message when the server sent none.
    pub fn with_fallback(self, fallback: &str) -> Self {
        match self {
            ApiError::Server {
                status,
                message: None,
                location,
            } => ApiError::Server {
                status,
                message: Some(fallback.to_string()),
                location,
            },
            other => other,
        }
    }

    /// Text suitable for an inline error banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::Network { message, .. }
            | ApiError::Json { message, .. }
            | ApiError::Http { message, .. }
            | ApiError::InvalidUrl { message, .. }
            | ApiError::Storage { message, .. } => message.clone(),
            ApiError::Server { status, message, .. } => server_text(status, message),
        }
    }

    /// 401 and 403 are also handled globally by the transport
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated { .. } | ApiError::Forbidden { .. }
        )
    }
}

fn server_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request failed with status code {}", status),
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ApiError::network(err)
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
