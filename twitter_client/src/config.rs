use std::path::PathBuf;
use std::time::Duration;

use crate::consts::*;
use crate::error::{Error, Result};
use crate::util::mask;

/// OAuth 1.0a user-context credentials.
#[derive(Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &mask(&self.consumer_key))
            .field("consumer_secret", &mask(&self.consumer_secret))
            .field("access_token", &mask(&self.access_token))
            .field("access_token_secret", &mask(&self.access_token_secret))
            .finish()
    }
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::InvalidCredentials(format!("{} is empty", name)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TwitterConfig {
    pub credentials: Credentials,
    /// Log raw response bodies, and dump them into `log_dir` when set.
    pub debug: bool,
    pub log_dir: Option<PathBuf>,
    /// Talk to the API over https.
    pub use_ssl: bool,
    /// Overrides the REST base URL derived from `use_ssl`.
    pub api_url: Option<String>,
    pub timeout: Duration,
}

impl TwitterConfig {
    pub fn new(credentials: Credentials) -> Self {
        TwitterConfig {
            credentials,
            debug: false,
            log_dir: None,
            use_ssl: true,
            api_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// REST base URL without trailing slash, e.g. `https://api.twitter.com/1.1`.
    pub fn base_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let scheme = if self.use_ssl { "https" } else { "http" };
                format!("{}://{}/{}", scheme, REST_API_HOST, REST_API_VERSION)
            }
        }
    }
}
