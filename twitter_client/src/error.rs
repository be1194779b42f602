use thiserror::Error;

use crate::consts::NO_ERROR_CODE;

pub type Result<T> = std::result::Result<T, Error>;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Twitter API error {status} (code {code}): {message}")]
    Api { status: u16, code: i32, message: String },
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Cannot sign request: {0}")]
    Signature(String),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Cannot decode JSON: {0}")]
    JSONError(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Network Error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Cannot parse URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl Error {
    /// The upstream error classification, or `-1` if the failure carries none.
    pub fn error_code(&self) -> i32 {
        match self {
            Error::Api { code, .. } => *code,
            _ => NO_ERROR_CODE,
        }
    }

    /// HTTP status of the failed call, if the request reached the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
