//! Service layer - transactional entity operations.

mod entity_manager;

pub use entity_manager::{ChildLookup, EntityManager, EntityService};
