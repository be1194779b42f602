mod config;
mod consts;
mod error;
mod oauth;
mod response;
mod result;
#[cfg(test)]
mod test;
mod util;

use reqwest::{header, Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use std::path::{Path, PathBuf};

use consts::*;
use oauth::OAuthSigner;
use response::{CursoredUsersResponse, ErrorResponse, StatusListResponse, UserResponse};
pub use result::*;

pub use crate::config::{Credentials, TwitterConfig};
pub use crate::consts::{DEFAULT_PAGE_SIZE, FIRST_CURSOR, NO_ERROR_CODE, PAGE_NOT_EXIST_CODE};
pub use crate::error::{Error, Result};

use twitter_tool_util::build_params;

/// REST v1.1 client signing every request with the configured user credentials.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: reqwest::Client,
    signer: OAuthSigner,
    base_url: String,
    debug: bool,
    log_dir: Option<PathBuf>,
}

impl TwitterClient {
    pub fn new(config: TwitterConfig) -> Result<TwitterClient> {
        config.credentials.validate()?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        let base_url = config.base_url();
        tracing::debug!("Twitter client configured: {:?}, base url {}", config, base_url);

        Ok(TwitterClient {
            client,
            signer: OAuthSigner::new(config.credentials),
            base_url,
            debug: config.debug,
            log_dir: config.log_dir,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn user_timeline(&self, target: &UserTarget, paging: Paging) -> Result<Vec<Status>> {
        let mut params = target.params("");
        params.extend(build_params! {
            required page => paging.page,
            required count => paging.count,
        });
        let response: StatusListResponse = self.rest_get("UserTimeline", params).await?;
        Ok(response.into())
    }

    pub async fn show_user(&self, target: &UserTarget) -> Result<User> {
        let response: UserResponse = self.rest_get("ShowUser", target.params("")).await?;
        Ok(response.into())
    }

    pub async fn followers_list(&self, target: &UserTarget, cursor: i64) -> Result<UserPage> {
        let mut params = target.params("");
        params.extend(build_params! { required cursor });
        let response: CursoredUsersResponse = self.rest_get("FollowersList", params).await?;
        Ok(response.into())
    }

    pub async fn user_list_members(&self, owner: &UserTarget, slug: &str, cursor: i64) -> Result<UserPage> {
        let mut params = owner.params("owner_");
        params.extend(build_params! {
            required slug,
            required cursor,
        });
        let response: CursoredUsersResponse = self.rest_get("UserListMembers", params).await?;
        Ok(response.into())
    }

    pub async fn user_list_statuses(&self, owner: &UserTarget, slug: &str, paging: Paging) -> Result<Vec<Status>> {
        let mut params = owner.params("owner_");
        params.extend(build_params! {
            required slug,
            required page => paging.page,
            required count => paging.count,
        });
        let response: StatusListResponse = self.rest_get("UserListStatuses", params).await?;
        Ok(response.into())
    }
}

impl TwitterClient {
    async fn rest_get<R>(&self, endpoint: &str, params: Vec<(String, String)>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let Some(path) = REST_PATHS.get(endpoint) else {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        };

        let base_url = format!("{}{}", self.base_url, path);
        let url = Url::parse_with_params(&base_url, &params)?;
        let authorization = self.signer.sign("GET", &base_url, &params)?;
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        let content = response.text().await?;
        if self.debug {
            tracing::debug!("{} responded {}: {}", endpoint, status, content);
            if let Some(dir) = &self.log_dir {
                if let Err(e) = log(dir, endpoint, &content).await {
                    tracing::warn!("Cannot dump {} response into {}: {}", endpoint, dir.display(), e);
                }
            }
        }
        if !status.is_success() {
            return Err(api_error(status, &content));
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&content);
        Ok(serde_path_to_error::deserialize(deserializer)?)
    }
}

/// Build an `Error::Api` from a failed response, reading the first entry of `errors[]` when present.
fn api_error(status: StatusCode, content: &str) -> Error {
    let parsed = serde_json::from_str::<ErrorResponse>(content).ok();
    let (code, message) = match parsed {
        Some(ErrorResponse { errors, error }) => match errors.into_iter().next() {
            Some(entry) => (entry.code, entry.message),
            None => (NO_ERROR_CODE, error.unwrap_or_default()),
        },
        None => (NO_ERROR_CODE, String::new()),
    };
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("Unknown status").to_string()
    } else {
        message
    };
    Error::Api {
        status: status.as_u16(),
        code,
        message,
    }
}

async fn log(dir: &Path, name: &str, content: &str) -> Result<()> {
    use tokio::{fs::File, io::AsyncWriteExt};

    let time = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
    let filepath = dir.join(format!("twitter_{}_{}.json", name, time));
    let mut file = File::create(filepath).await?;
    file.write_all(content.as_bytes()).await?;
    Ok(())
}
