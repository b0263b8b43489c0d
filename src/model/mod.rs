//! Data transfer types shared by the HTTP API and its consumers.

pub mod api;
pub mod chart;
pub mod claim;
pub mod food_listing;
pub mod mutation;
pub mod provider;
pub mod receiver;
pub mod report;
pub mod table;

/// Shown in place of a missing value in tables and charts.
pub const UNKNOWN: &str = "Unknown";
