//! Service layer for the food redistribution backend.
//!
//! Services hold the business rules: the report catalog, in-memory filtering of table
//! snapshots, validated mutations and the summary chart analytics. They sit between the
//! controllers and the data layer.

pub mod analytics;
pub mod browse;
pub mod catalog;
pub mod filter;
pub mod mutation;
