//! Server application core modules.
//!
//! This module contains the backend for the food redistribution service: configuration,
//! startup and migrations, the data access layer over the four persisted tables, the
//! report catalog, filtering, mutation and analytics services, and the HTTP controllers
//! exposing them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
