//! Repository layer for data access.

mod base;
pub mod entities;
mod unit_of_work;

pub use base::{ChildRecord, ChildRepository, Record, Repository, SeaRepository};
pub use unit_of_work::{Persistence, TransactionContext};
