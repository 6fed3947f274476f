//! Application state for dependency injection.

use std::sync::Arc;

use domain::{Apartment, Building, Floor};

use crate::infra::{Database, EntityCache};
use crate::repository::Persistence;
use crate::service::EntityManager;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub cache: Option<Arc<dyn EntityCache>>,
    pub buildings: Arc<EntityManager<Building>>,
    pub floors: Arc<EntityManager<Floor>>,
    pub apartments: Arc<EntityManager<Apartment>>,
}

impl AppState {
    /// Wire one entity service per entity over a shared connection pool.
    pub fn new(database: Database, cache: Option<Arc<dyn EntityCache>>) -> Self {
        let persistence = Persistence::new(database.get_connection());

        Self {
            buildings: Arc::new(EntityManager::new(persistence.clone(), cache.clone())),
            floors: Arc::new(EntityManager::new(persistence.clone(), cache.clone())),
            apartments: Arc::new(EntityManager::new(persistence, cache.clone())),
            database,
            cache,
        }
    }
}
