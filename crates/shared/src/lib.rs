//! Shared utilities and common types for the gift registry backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Hashing utilities for comparing shared secrets
//! - Common validation logic
//! - Serde helpers for partial-update payloads

pub mod crypto;
pub mod nullable;
pub mod validation;
