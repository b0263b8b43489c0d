//! HTTP controller endpoints for the foodshare API.
//!
//! Axum handlers for the dataset overview, filtered browsing and mutation of each table,
//! the report catalog and the summary charts. Controllers only translate between HTTP and
//! the service layer, all rules live in the services. Endpoints are documented with utoipa.

pub mod analytics;
pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;
pub mod report;
pub mod table;
