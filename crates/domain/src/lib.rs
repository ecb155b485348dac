//! Domain layer for the Group Therapy backend.
//!
//! This crate contains:
//! - Domain models and request payloads for label content and accounts
//! - The `Storage` interface every backing store implements
//! - An in-memory `Storage` for development and tests

pub mod memory;
pub mod models;
pub mod storage;

pub use memory::MemStorage;
pub use storage::{Storage, StorageError, StorageResult};
