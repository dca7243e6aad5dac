//! Core data types for translation tables, header metadata, and violations.

pub mod metadata;
pub mod table;
pub mod violation;
