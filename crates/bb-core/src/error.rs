use error_location::ErrorLocation;

use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid subscription status: {value} {location}")]
    InvalidSubscriptionStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid business type: {value} {location}")]
    InvalidBusinessType {
        value: String,
        location: ErrorLocation,
    },

    #[error("IO error writing {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
