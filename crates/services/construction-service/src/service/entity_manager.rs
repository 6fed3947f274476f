//! Entity service with read-through caching.
//!
//! Each operation runs in one transaction. Updates and deletes park a
//! pending-write marker in the cache before their transaction and settle it
//! after: the fresh value on update, a short-lived marker on delete, eviction
//! on rollback. Reads fill the cache only when the key is empty. Cache
//! failures are logged, never returned.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use common::error::ERROR_KEY_ID_NULL;
use common::{AppError, AppResult, Page, PageRequest};

use crate::infra::{cache_key, EntityCache, PENDING_WRITE};
use crate::repository::{ChildRecord, ChildRepository, Persistence, Record, Repository};

/// CRUD operations exposed to the HTTP layer.
#[async_trait]
pub trait EntityService<T: Send + 'static>: Send + Sync {
    async fn create(&self, entity: T) -> AppResult<T>;

    /// Replace an existing entity. Fails with `NotFound` for an unknown id.
    async fn update(&self, entity: T) -> AppResult<T>;

    async fn find_page(&self, request: PageRequest) -> AppResult<Page<T>>;

    async fn find_one(&self, id: i64) -> AppResult<Option<T>>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

/// Paginated lookup of the children of a parent entity.
#[async_trait]
pub trait ChildLookup<T: Send + 'static>: Send + Sync {
    /// Fails with `NotFound` when the parent does not exist.
    async fn find_page_by_parent(&self, parent_id: i64, request: PageRequest)
        -> AppResult<Page<T>>;
}

/// Generic [`EntityService`] implementation for any persisted record.
pub struct EntityManager<R> {
    persistence: Persistence,
    cache: Option<Arc<dyn EntityCache>>,
    _record: PhantomData<R>,
}

impl<R> EntityManager<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    pub fn new(persistence: Persistence, cache: Option<Arc<dyn EntityCache>>) -> Self {
        Self {
            persistence,
            cache,
            _record: PhantomData,
        }
    }

    async fn cached(&self, id: i64) -> Option<R> {
        let cache = self.cache.as_ref()?;
        let key = cache_key(R::ENTITY_NAME, id);

        match cache.get(&key).await {
            Ok(Some(json)) if json == PENDING_WRITE => {
                debug!("Write pending for {}, bypassing cache", key);
                None
            }
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(entity) => {
                    debug!("Cache hit for {}", key);
                    Some(entity)
                }
                Err(e) => {
                    warn!("Failed to deserialize cached value for key {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Cache read failed for key {}: {:?}", key, e);
                None
            }
        }
    }

    async fn cache_put(&self, entity: &R) {
        let (Some(cache), Some(id)) = (&self.cache, entity.id()) else {
            return;
        };
        let key = cache_key(R::ENTITY_NAME, id);

        match serde_json::to_string(entity) {
            Ok(json) => {
                if let Err(e) = cache.put(&key, json).await {
                    warn!("Cache write failed for key {}: {:?}", key, e);
                }
            }
            Err(e) => warn!("Failed to serialize {} for cache: {}", key, e),
        }
    }

    /// Fill the cache after a read, unless a value or a pending write is already there.
    async fn cache_fill(&self, entity: &R) {
        let (Some(cache), Some(id)) = (&self.cache, entity.id()) else {
            return;
        };
        let key = cache_key(R::ENTITY_NAME, id);

        match serde_json::to_string(entity) {
            Ok(json) => match cache.put_if_absent(&key, json).await {
                Ok(true) => {}
                Ok(false) => debug!("Skipped cache fill for {}, key is taken", key),
                Err(e) => warn!("Cache write failed for key {}: {:?}", key, e),
            },
            Err(e) => warn!("Failed to serialize {} for cache: {}", key, e),
        }
    }

    async fn cache_mark_pending(&self, id: i64) {
        let Some(cache) = &self.cache else {
            return;
        };
        let key = cache_key(R::ENTITY_NAME, id);

        if let Err(e) = cache.mark_pending(&key).await {
            warn!("Cache write failed for key {}: {:?}", key, e);
        }
    }

    async fn cache_evict(&self, id: i64) {
        let Some(cache) = &self.cache else {
            return;
        };
        let key = cache_key(R::ENTITY_NAME, id);

        if let Err(e) = cache.evict(&key).await {
            warn!("Cache eviction failed for key {}: {:?}", key, e);
        }
    }
}

#[async_trait]
impl<R> EntityService<R> for EntityManager<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    async fn create(&self, entity: R) -> AppResult<R> {
        let saved = self
            .persistence
            .transaction(|ctx| Box::pin(async move { ctx.repository::<R>().save(entity).await }))
            .await?;

        self.cache_put(&saved).await;
        Ok(saved)
    }

    async fn update(&self, entity: R) -> AppResult<R> {
        let id = entity.id().ok_or_else(|| {
            AppError::bad_request_alert("Invalid id", R::ENTITY_NAME, ERROR_KEY_ID_NULL)
        })?;

        self.cache_mark_pending(id).await;
        let result = self
            .persistence
            .transaction(|ctx| {
                Box::pin(async move {
                    let repository = ctx.repository::<R>();
                    if !repository.exists_by_id(id).await? {
                        return Err(AppError::NotFound);
                    }
                    repository.save(entity).await
                })
            })
            .await;

        match result {
            Ok(saved) => {
                self.cache_put(&saved).await;
                Ok(saved)
            }
            Err(e) => {
                self.cache_evict(id).await;
                Err(e)
            }
        }
    }

    async fn find_page(&self, request: PageRequest) -> AppResult<Page<R>> {
        self.persistence
            .transaction(|ctx| {
                Box::pin(async move { ctx.repository::<R>().find_all(&request).await })
            })
            .await
    }

    async fn find_one(&self, id: i64) -> AppResult<Option<R>> {
        if let Some(entity) = self.cached(id).await {
            return Ok(Some(entity));
        }

        let found = self
            .persistence
            .transaction(|ctx| Box::pin(async move { ctx.repository::<R>().find_by_id(id).await }))
            .await?;

        if let Some(entity) = &found {
            self.cache_fill(entity).await;
        }
        Ok(found)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.cache_mark_pending(id).await;
        let result = self
            .persistence
            .transaction(|ctx| {
                Box::pin(async move { ctx.repository::<R>().delete_by_id(id).await })
            })
            .await;

        match result {
            // Refresh the marker so fills of reads that started before the commit are refused.
            Ok(()) => {
                self.cache_mark_pending(id).await;
                Ok(())
            }
            Err(e) => {
                self.cache_evict(id).await;
                Err(e)
            }
        }
    }

    async fn count(&self) -> AppResult<u64> {
        self.persistence
            .transaction(|ctx| Box::pin(async move { ctx.repository::<R>().count().await }))
            .await
    }
}

#[async_trait]
impl<R> ChildLookup<R> for EntityManager<R>
where
    R: ChildRecord + Serialize + DeserializeOwned,
{
    async fn find_page_by_parent(
        &self,
        parent_id: i64,
        request: PageRequest,
    ) -> AppResult<Page<R>> {
        self.persistence
            .transaction(|ctx| {
                Box::pin(async move {
                    if !ctx.repository::<R::Parent>().exists_by_id(parent_id).await? {
                        return Err(AppError::NotFound);
                    }
                    ctx.repository::<R>()
                        .find_all_by_parent(parent_id, &request)
                        .await
                })
            })
            .await
    }
}
