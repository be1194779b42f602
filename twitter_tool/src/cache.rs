use moka::sync::Cache;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{Error, Result};

pub const MISS_CACHE_GROUP: &str = "TwitterToolMissCache";
pub const DEFAULT_MISS_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MISS_CACHE_CAPACITY: u64 = 10_000;

/// Key-value store partitioned into named groups, supplied by the host.
pub trait CacheStore: Send + Sync + std::fmt::Debug {
    fn get(&self, group: &str, key: &str) -> Result<Option<bool>>;
    fn put(&self, group: &str, key: &str, value: bool) -> Result<()>;
    fn remove(&self, group: &str, key: &str) -> Result<()>;
    fn flush_group(&self, group: &str) -> Result<()>;
}

/// In-process store: one bounded moka cache per group, entries expire `ttl` after insertion.
#[derive(Debug)]
pub struct MemoryCacheStore {
    capacity: u64,
    ttl: Duration,
    groups: RwLock<HashMap<String, Cache<String, bool>>>,
}

impl MemoryCacheStore {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            groups: RwLock::new(HashMap::new()),
        }
    }

    fn group(&self, group: &str) -> Result<Option<Cache<String, bool>>> {
        let groups = self.groups.read().map_err(|e| Error::CacheStore(e.to_string()))?;
        Ok(groups.get(group).cloned())
    }

    fn group_or_insert(&self, group: &str) -> Result<Cache<String, bool>> {
        if let Some(cache) = self.group(group)? {
            return Ok(cache);
        }
        let mut groups = self.groups.write().map_err(|e| Error::CacheStore(e.to_string()))?;
        let cache = groups.entry(group.to_string()).or_insert_with(|| {
            Cache::builder()
                .max_capacity(self.capacity)
                .time_to_live(self.ttl)
                .build()
        });
        Ok(cache.clone())
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MISS_CACHE_CAPACITY, DEFAULT_MISS_CACHE_TTL)
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, group: &str, key: &str) -> Result<Option<bool>> {
        Ok(self.group(group)?.and_then(|cache| cache.get(key)))
    }

    fn put(&self, group: &str, key: &str, value: bool) -> Result<()> {
        self.group_or_insert(group)?.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, group: &str, key: &str) -> Result<()> {
        if let Some(cache) = self.group(group)? {
            cache.invalidate(key);
        }
        Ok(())
    }

    fn flush_group(&self, group: &str) -> Result<()> {
        let mut groups = self.groups.write().map_err(|e| Error::CacheStore(e.to_string()))?;
        groups.remove(group);
        Ok(())
    }
}

/// Negative-result cache: records screen names and ids whose lookups failed permanently.
/// Clones share the same store.
#[derive(Debug, Clone)]
pub struct MissCache {
    store: Arc<dyn CacheStore>,
    group: String,
}

impl MissCache {
    pub fn new(store: Arc<dyn CacheStore>, group: impl Into<String>) -> Self {
        Self {
            store,
            group: group.into(),
        }
    }

    pub fn in_memory(capacity: u64, ttl: Duration) -> Self {
        Self::new(Arc::new(MemoryCacheStore::new(capacity, ttl)), MISS_CACHE_GROUP)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Whether `key` is a known miss. Store failures count as "not a miss".
    pub fn get(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        match self.store.get(&self.group, key) {
            Ok(value) => value.unwrap_or(false),
            Err(e) => {
                tracing::error!("Cache store failed for group '{}', key '{}': {}", self.group, key, e);
                false
            }
        }
    }

    pub fn put(&self, key: &str, value: bool) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }
        self.store.put(&self.group, key, value)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }
        self.store.remove(&self.group, key)
    }

    pub fn remove_all(&self) -> Result<()> {
        self.store.flush_group(&self.group)?;
        tracing::info!("Flushed miss cache group '{}'", self.group);
        Ok(())
    }
}

impl Default for MissCache {
    fn default() -> Self {
        Self::new(Arc::new(MemoryCacheStore::default()), MISS_CACHE_GROUP)
    }
}
