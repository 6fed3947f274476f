//! Redis read-through cache for entities.
//!
//! Values are stored as JSON strings under `"{entity}:{id}"` keys with a
//! configured TTL. Serialization is the caller's concern, so the trait
//! stays object-safe and mockable.
//!
//! Writers park [`PENDING_WRITE`] under the key before touching the database
//! and replace it after commit. Read-through fills use [`EntityCache::put_if_absent`]
//! so a reader holding a value loaded before a concurrent write cannot
//! overwrite the marker or the fresh value.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};
use tracing::debug;

use common::{AppResult, CacheConfig};

/// Marker stored under a key while a write to that entity is in flight,
/// and kept for a short while after a delete.
pub const PENDING_WRITE: &str = "__pending_write__";

/// Lifetime of a [`PENDING_WRITE`] marker in seconds
pub const PENDING_WRITE_TTL_SECONDS: u64 = 30;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity cache trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EntityCache: Send + Sync {
    /// Get a cached JSON value.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a JSON value with the default TTL.
    async fn put(&self, key: &str, value: String) -> AppResult<()>;

    /// Store a JSON value only when the key is empty. Returns whether it was stored.
    async fn put_if_absent(&self, key: &str, value: String) -> AppResult<bool>;

    /// Park the pending-write marker under the key, replacing any value.
    async fn mark_pending(&self, key: &str) -> AppResult<()>;

    /// Remove a value.
    async fn evict(&self, key: &str) -> AppResult<()>;

    /// Check connectivity.
    async fn ping(&self) -> AppResult<()>;
}

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connect to Redis.
    pub async fn connect(url: &str, default_ttl: u64) -> Result<Self, RedisError> {
        debug!("Connecting to Redis at {}", url);
        let client = Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;

        Ok(Self {
            connection,
            default_ttl,
        })
    }

    /// Connect when a URL is configured.
    ///
    /// An unreachable Redis disables caching instead of failing startup.
    pub async fn from_config(config: &CacheConfig) -> Option<Self> {
        let url = config.url.as_deref()?;

        match Self::connect(url, config.default_ttl_seconds).await {
            Ok(cache) => {
                tracing::info!("Redis cache connected");
                Some(cache)
            }
            Err(e) => {
                tracing::warn!("Redis unavailable, caching disabled: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl EntityCache for RedisCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: String) -> AppResult<()> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, self.default_ttl).await?;
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: String) -> AppResult<bool> {
        let mut conn = self.connection.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(self.default_ttl)
            .query_async(&mut conn)
            .await?;
        Ok(reply.is_some())
    }

    async fn mark_pending(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, PENDING_WRITE, PENDING_WRITE_TTL_SECONDS)
            .await?;
        Ok(())
    }

    async fn evict(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

/// Cache key for an entity.
pub fn cache_key(entity_name: &str, id: i64) -> String {
    format!("{}:{}", entity_name, id)
}
