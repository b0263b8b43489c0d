//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to HTTP handlers and type
//! aliases for the database entity models.

pub mod app;
pub mod db;
