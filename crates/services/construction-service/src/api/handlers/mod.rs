//! HTTP request handlers.

pub mod apartment_handler;
pub mod building_handler;
pub mod floor_handler;
pub mod resource;

pub use apartment_handler::apartment_routes;
pub use building_handler::building_routes;
pub use floor_handler::floor_routes;
