//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Query
//! parameters use validator for range and presence checks; request bodies
//! are type-checked only.

pub mod demo;
pub mod health;
pub mod invoice;
pub mod message;
pub mod pagination;
pub mod payrun;
pub mod people;
pub mod shift_invoice;
pub mod shift_report;
