//! Shared utilities for the Group Therapy backend.
//!
//! This crate provides functionality used across the other crates:
//! - Password hashing with Argon2id
//! - Admin access tokens (JWT)
//! - Common validation logic

pub mod jwt;
pub mod password;
pub mod validation;
