use std::future::Future;

use twitter_client::{
    Paging, Status, TwitterClient, TwitterConfig, User, UserPage, UserTarget, DEFAULT_PAGE_SIZE, FIRST_CURSOR,
    PAGE_NOT_EXIST_CODE,
};

use crate::cache::MissCache;
use crate::config::TwitterToolConfig;
use crate::error::{Error, Result};

/// Template-facing facade over [`TwitterClient`].
///
/// Every operation returns `None` instead of an error: failures are logged, and targets that
/// failed with [`PAGE_NOT_EXIST_CODE`] are recorded in the miss cache so later calls for them
/// skip the network.
#[derive(Debug, Clone)]
pub struct TwitterTool {
    client: TwitterClient,
    miss_cache: MissCache,
}

#[derive(Debug, Default)]
pub struct TwitterToolBuilder {
    config: Option<TwitterConfig>,
    miss_cache: Option<MissCache>,
}

impl TwitterToolBuilder {
    pub fn config(mut self, config: TwitterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Share a miss cache with other tool instances. Defaults to a private in-memory cache.
    pub fn miss_cache(mut self, miss_cache: MissCache) -> Self {
        self.miss_cache = Some(miss_cache);
        self
    }

    pub fn build(self) -> Result<TwitterTool> {
        tracing::debug!("Twitter Tool starting up");
        let config = self.config.ok_or(Error::NotConfigured)?;
        let client = TwitterClient::new(config)?;
        let miss_cache = self.miss_cache.unwrap_or_default();
        tracing::info!("Twitter Tool started up against {}", client.base_url());
        Ok(TwitterTool { client, miss_cache })
    }
}

impl TwitterTool {
    pub fn builder() -> TwitterToolBuilder {
        TwitterToolBuilder::default()
    }

    /// Build a tool with its own in-memory miss cache sized from `config`.
    pub fn from_config(config: TwitterToolConfig) -> Result<TwitterTool> {
        let miss_cache = MissCache::in_memory(config.miss_cache_capacity, config.miss_cache_ttl);
        Self::builder().config(config.client).miss_cache(miss_cache).build()
    }

    /// The underlying client, for calls the facade does not cover.
    pub fn client(&self) -> &TwitterClient {
        &self.client
    }

    pub fn miss_cache(&self) -> &MissCache {
        &self.miss_cache
    }

    /// Recent posts of `target`. `page` and `count` default to 1 and 20 when unset or zero.
    pub async fn user_timeline(&self, target: &UserTarget, page: Option<u32>, count: Option<u32>) -> Option<Vec<Status>> {
        let paging = paging(page, count);
        self.guarded("timeline", target, || self.client.user_timeline(target, paging))
            .await
    }

    pub async fn show_user(&self, target: &UserTarget) -> Option<User> {
        self.guarded("user", target, || self.client.show_user(target)).await
    }

    /// First page of followers of `target`, in the API's default page size of 20.
    pub async fn followers_list(&self, target: &UserTarget) -> Option<UserPage> {
        self.guarded("followers", target, || self.client.followers_list(target, FIRST_CURSOR))
            .await
    }

    /// First page of members of the list `slug` owned by `owner`.
    pub async fn user_list_members(&self, owner: &UserTarget, slug: &str) -> Option<UserPage> {
        self.guarded("userlist members", owner, || {
            self.client.user_list_members(owner, slug, FIRST_CURSOR)
        })
        .await
    }

    pub async fn user_list_statuses(
        &self,
        owner: &UserTarget,
        slug: &str,
        page: Option<u32>,
        count: Option<u32>,
    ) -> Option<Vec<Status>> {
        let paging = paging(page, count);
        self.guarded("tweets", owner, || self.client.user_list_statuses(owner, slug, paging))
            .await
    }
}

impl TwitterTool {
    /// Run `call` unless `target` is a known miss, turning any failure into `None`.
    async fn guarded<T, F, Fut>(&self, what: &str, target: &UserTarget, call: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = twitter_client::Result<T>>,
    {
        let key = target.to_string();
        if self.miss_cache.get(&key) {
            tracing::debug!("Miss cached with {}: {}", kind(target), key);
            return None;
        }

        match call().await {
            Ok(result) => Some(result),
            Err(e) => {
                let code = e.error_code();
                tracing::error!(
                    "Error fetching {} for {}: {} errorCode: {}: {}",
                    what,
                    kind(target),
                    key,
                    code,
                    e
                );
                if code == PAGE_NOT_EXIST_CODE {
                    tracing::debug!("Adding {} to the miss cache", key);
                    if let Err(e) = self.miss_cache.put(&key, true) {
                        tracing::error!("Cannot add {} to the miss cache: {}", key, e);
                    }
                }
                None
            }
        }
    }
}

fn kind(target: &UserTarget) -> &'static str {
    match target {
        UserTarget::Handle(_) => "handle",
        UserTarget::Id(_) => "userId",
    }
}

/// Substitute page 1 and the default page size for unset (`None` or `0`) values.
pub fn paging(page: Option<u32>, count: Option<u32>) -> Paging {
    Paging {
        page: page.filter(|p| *p > 0).unwrap_or(1),
        count: count.filter(|c| *c > 0).unwrap_or(DEFAULT_PAGE_SIZE),
    }
}
