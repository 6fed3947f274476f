//! SeaORM entities and their domain mappings.

pub mod apartment;
pub mod building;
pub mod floor;
