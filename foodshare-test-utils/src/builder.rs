//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{ClaimModel, FoodListingModel, ProviderModel, ReceiverModel},
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_food_tables: bool,

    // Database fixtures to insert
    providers: Vec<ProviderModel>,
    receivers: Vec<ReceiverModel>,
    food_listings: Vec<FoodListingModel>,
    claims: Vec<ClaimModel>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_food_tables: false,
            providers: Vec::new(),
            receivers: Vec::new(),
            food_listings: Vec::new(),
            claims: Vec::new(),
        }
    }

    /// Add all four tables (providers, receivers, food listings, claims) to the test database.
    pub fn with_food_tables(mut self) -> Self {
        self.include_food_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use foodshare_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), foodshare_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Provider)
    ///     .with_table(FoodListing)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a provider row to be inserted during `build()`.
    pub fn with_provider(mut self, provider: ProviderModel) -> Self {
        self.providers.push(provider);
        self
    }

    /// Queue a provider row built from [`factory::mock_provider`].
    pub fn with_mock_provider(self, provider_id: i32) -> Self {
        self.with_provider(factory::mock_provider(provider_id))
    }

    /// Queue a receiver row to be inserted during `build()`.
    pub fn with_receiver(mut self, receiver: ReceiverModel) -> Self {
        self.receivers.push(receiver);
        self
    }

    /// Queue a receiver row built from [`factory::mock_receiver`].
    pub fn with_mock_receiver(self, receiver_id: i32) -> Self {
        self.with_receiver(factory::mock_receiver(receiver_id))
    }

    /// Queue a food listing row to be inserted during `build()`.
    ///
    /// The referenced provider is not created; listings may point at providers that
    /// don't exist, the same as in production.
    pub fn with_food_listing(mut self, food_listing: FoodListingModel) -> Self {
        self.food_listings.push(food_listing);
        self
    }

    /// Queue a food listing row built from [`factory::mock_food_listing`].
    pub fn with_mock_food_listing(self, food_id: i32, provider_id: i32) -> Self {
        self.with_food_listing(factory::mock_food_listing(food_id, provider_id))
    }

    /// Queue a claim row to be inserted during `build()`.
    pub fn with_claim(mut self, claim: ClaimModel) -> Self {
        self.claims.push(claim);
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (food tables if specified, then custom tables)
    /// 2. Inserts providers, receivers, food listings, then claims
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_food_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Provider),
                schema.create_table_from_entity(entity::prelude::Receiver),
                schema.create_table_from_entity(entity::prelude::FoodListing),
                schema.create_table_from_entity(entity::prelude::Claim),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for provider in self.providers {
            setup.fixtures().insert_provider(provider).await?;
        }

        for receiver in self.receivers {
            setup.fixtures().insert_receiver(receiver).await?;
        }

        for food_listing in self.food_listings {
            setup.fixtures().insert_food_listing(food_listing).await?;
        }

        for claim in self.claims {
            setup.fixtures().insert_claim(claim).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
