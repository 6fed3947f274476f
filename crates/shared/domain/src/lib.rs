//! Domain layer - Construction entities and value objects.
//!
//! This crate contains the plain data holders shared by every layer of the
//! service. It has no infrastructure dependencies: persistence mappings live
//! in the service crate, HTTP concerns in `common`.

pub mod apartment;
pub mod building;
pub mod constants;
pub mod entity;
pub mod error;
pub mod floor;

pub use apartment::Apartment;
pub use building::Building;
pub use constants::*;
pub use entity::DomainEntity;
pub use error::{DomainError, DomainResult};
pub use floor::Floor;
