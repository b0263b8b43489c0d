//! Data access layer.
//!
//! [`store::Store`] runs raw SQL and returns generic row sets, used for dataset snapshots
//! and catalog reports. The per-table repositories provide typed create, read, update and
//! delete operations through SeaORM entities. Every statement commits on its own.

pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;
pub mod store;
