//! Domain layer containing record entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Row-per-entity records and their insert payloads
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on a concrete database;
//! [`crate::infrastructure::persistence`] implements the traits for PostgreSQL.

pub mod entities;
pub mod repositories;
