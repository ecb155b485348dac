//! Persistence layer for the Group Therapy backend.
//!
//! This crate contains:
//! - Database connection management and embedded migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations, one per table
//! - `DatabaseStorage`, the Postgres implementation of `domain::Storage`

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod storage;

pub use storage::DatabaseStorage;
