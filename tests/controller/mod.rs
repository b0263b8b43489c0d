//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, response
//! bodies and the mapping of validation, not found and database errors.

mod analytics;
mod claim;
mod food_listing;
mod provider;
mod receiver;
mod report;
mod table;

use foodshare_test_utils::prelude::*;

use crate::{util::body_json, TestContextExt};
