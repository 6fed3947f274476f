//! API layer - HTTP handlers and extractors
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers, one resource per entity
//! - Custom extractors (validated JSON, pagination)
//! - Pagination response headers
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod pagination;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
