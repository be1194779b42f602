use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Twitter client error: {0}")]
    Client(#[from] twitter_client::Error),
    #[error("Miss cache key cannot be empty")]
    InvalidKey,
    #[error("Cache store error: {0}")]
    CacheStore(String),
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("Invalid property {name}: {value}")]
    InvalidProperty { name: &'static str, value: String },
    #[error("Twitter tool is not configured")]
    NotConfigured,
}
