use std::path::PathBuf;
use std::time::Duration;

use twitter_client::{Credentials, TwitterConfig};
use twitter_tool_util::{parse_flag, parse_number};

use crate::cache::{DEFAULT_MISS_CACHE_CAPACITY, DEFAULT_MISS_CACHE_TTL};
use crate::error::{Error, Result};

pub const ENV_DEBUG: &str = "TWITTER_DEBUG";
pub const ENV_CONSUMER_KEY: &str = "TWITTER_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "TWITTER_CONSUMER_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "TWITTER_ACCESS_TOKEN";
pub const ENV_TOKEN_SECRET: &str = "TWITTER_TOKEN_SECRET";
pub const ENV_USE_SSL: &str = "TWITTER_USE_SSL";
pub const ENV_API_URL: &str = "TWITTER_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "TWITTER_TIMEOUT_SECS";
pub const ENV_LOG_DIR: &str = "CLIENT_LOG_DIR";
pub const ENV_MISS_CACHE_TTL_SECS: &str = "MISS_CACHE_TTL_SECS";
pub const ENV_MISS_CACHE_CAPACITY: &str = "MISS_CACHE_CAPACITY";

/// Everything the tool reads from the host configuration at startup.
#[derive(Debug, Clone)]
pub struct TwitterToolConfig {
    pub client: TwitterConfig,
    pub miss_cache_ttl: Duration,
    pub miss_cache_capacity: u64,
}

impl TwitterToolConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a property name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| lookup(name).ok_or(Error::MissingCredential(name));

        let credentials = Credentials {
            consumer_key: required(ENV_CONSUMER_KEY)?,
            consumer_secret: required(ENV_CONSUMER_SECRET)?,
            access_token: required(ENV_ACCESS_TOKEN)?,
            access_token_secret: required(ENV_TOKEN_SECRET)?,
        };

        let mut client = TwitterConfig::new(credentials);
        if let Some(debug) = lookup(ENV_DEBUG) {
            client.debug = parse_flag(&debug).map_err(|_| invalid(ENV_DEBUG, debug))?;
        }
        if let Some(use_ssl) = lookup(ENV_USE_SSL) {
            client.use_ssl = parse_flag(&use_ssl).map_err(|_| invalid(ENV_USE_SSL, use_ssl))?;
        }
        client.api_url = lookup(ENV_API_URL);
        client.log_dir = lookup(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_number::<u64>(&secs).map_err(|_| invalid(ENV_TIMEOUT_SECS, secs))?;
            client.timeout = Duration::from_secs(secs);
        }

        let miss_cache_ttl = match lookup(ENV_MISS_CACHE_TTL_SECS) {
            Some(secs) => Duration::from_secs(
                parse_number::<u64>(&secs).map_err(|_| invalid(ENV_MISS_CACHE_TTL_SECS, secs))?,
            ),
            None => DEFAULT_MISS_CACHE_TTL,
        };
        let miss_cache_capacity = match lookup(ENV_MISS_CACHE_CAPACITY) {
            Some(capacity) => {
                parse_number::<u64>(&capacity).map_err(|_| invalid(ENV_MISS_CACHE_CAPACITY, capacity))?
            }
            None => DEFAULT_MISS_CACHE_CAPACITY,
        };

        Ok(TwitterToolConfig {
            client,
            miss_cache_ttl,
            miss_cache_capacity,
        })
    }
}

fn invalid(name: &'static str, value: String) -> Error {
    Error::InvalidProperty { name, value }
}
