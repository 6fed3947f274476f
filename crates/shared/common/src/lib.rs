//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling with HTTP conversion
//! - Entity alert headers
//! - Pagination request/response types
//! - Configuration structures

pub mod alert;
pub mod config;
pub mod error;
pub mod pagination;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use pagination::{Direction, Page, PageQuery, PageRequest, Sort};
