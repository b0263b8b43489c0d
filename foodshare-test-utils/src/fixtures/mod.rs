//! Test fixture modules for database row creation.
//!
//! - `data` - Inserts provider, receiver, food listing and claim rows into the test database
//! - `factory` - Pure functions returning in-memory models with standard test values

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn fixtures<'a>(&'a mut self) -> FoodFixtures<'a> {
        FoodFixtures { setup: self }
    }
}

pub struct FoodFixtures<'a> {
    pub setup: &'a mut TestContext,
}
