//! Infrastructure layer - database, migrations and cache.

mod cache;
mod db;
pub mod migrations;

pub use cache::{cache_key, EntityCache, RedisCache, PENDING_WRITE};
#[cfg(any(test, feature = "test-utils"))]
pub use cache::MockEntityCache;
pub use db::Database;
pub use migrations::Migrator;
