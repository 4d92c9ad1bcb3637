use std::time::Duration;

use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
