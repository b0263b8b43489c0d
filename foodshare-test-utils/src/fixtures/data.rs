//! Database insertion utilities for fixtures.
//!
//! Rows are inserted with their primary key set explicitly so tests can refer to
//! known ids. No parent rows are created automatically.

use entity::sea_orm_active_enums::ClaimStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::{factory, FoodFixtures},
    model::{ClaimModel, FoodListingModel, ProviderModel, ReceiverModel},
};

impl<'a> FoodFixtures<'a> {
    /// Insert a provider row.
    ///
    /// # Returns
    /// - `Ok(ProviderModel)` - The inserted provider
    /// - `Err(TestError::DbErr)` - Insert failed (e.g. table missing or duplicate id)
    pub async fn insert_provider(
        &self,
        provider: ProviderModel,
    ) -> Result<ProviderModel, TestError> {
        Ok(
            entity::prelude::Provider::insert(entity::provider::ActiveModel {
                provider_id: ActiveValue::Set(provider.provider_id),
                name: ActiveValue::Set(provider.name),
                provider_type: ActiveValue::Set(provider.provider_type),
                contact: ActiveValue::Set(provider.contact),
                city: ActiveValue::Set(provider.city),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a provider row with standard test values.
    pub async fn insert_mock_provider(
        &self,
        provider_id: i32,
    ) -> Result<ProviderModel, TestError> {
        self.insert_provider(factory::mock_provider(provider_id)).await
    }

    /// Insert a receiver row.
    pub async fn insert_receiver(
        &self,
        receiver: ReceiverModel,
    ) -> Result<ReceiverModel, TestError> {
        Ok(
            entity::prelude::Receiver::insert(entity::receiver::ActiveModel {
                receiver_id: ActiveValue::Set(receiver.receiver_id),
                name: ActiveValue::Set(receiver.name),
                receiver_type: ActiveValue::Set(receiver.receiver_type),
                contact: ActiveValue::Set(receiver.contact),
                city: ActiveValue::Set(receiver.city),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a receiver row with standard test values.
    pub async fn insert_mock_receiver(
        &self,
        receiver_id: i32,
    ) -> Result<ReceiverModel, TestError> {
        self.insert_receiver(factory::mock_receiver(receiver_id)).await
    }

    /// Insert a food listing row.
    pub async fn insert_food_listing(
        &self,
        food_listing: FoodListingModel,
    ) -> Result<FoodListingModel, TestError> {
        Ok(
            entity::prelude::FoodListing::insert(entity::food_listing::ActiveModel {
                food_id: ActiveValue::Set(food_listing.food_id),
                food_name: ActiveValue::Set(food_listing.food_name),
                quantity: ActiveValue::Set(food_listing.quantity),
                expiry_date: ActiveValue::Set(food_listing.expiry_date),
                provider_id: ActiveValue::Set(food_listing.provider_id),
                provider_type: ActiveValue::Set(food_listing.provider_type),
                location: ActiveValue::Set(food_listing.location),
                food_type: ActiveValue::Set(food_listing.food_type),
                meal_type: ActiveValue::Set(food_listing.meal_type),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a food listing row with standard test values.
    pub async fn insert_mock_food_listing(
        &self,
        food_id: i32,
        provider_id: i32,
    ) -> Result<FoodListingModel, TestError> {
        self.insert_food_listing(factory::mock_food_listing(food_id, provider_id)).await
    }

    /// Insert a claim row.
    pub async fn insert_claim(&self, claim: ClaimModel) -> Result<ClaimModel, TestError> {
        Ok(
            entity::prelude::Claim::insert(entity::claim::ActiveModel {
                claim_id: ActiveValue::Set(claim.claim_id),
                food_id: ActiveValue::Set(claim.food_id),
                receiver_id: ActiveValue::Set(claim.receiver_id),
                timestamp: ActiveValue::Set(claim.timestamp),
                status: ActiveValue::Set(claim.status),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a claim row with standard test values.
    pub async fn insert_mock_claim(
        &self,
        claim_id: i32,
        food_id: i32,
        receiver_id: i32,
        status: ClaimStatus,
    ) -> Result<ClaimModel, TestError> {
        self.insert_claim(factory::mock_claim(claim_id, food_id, receiver_id, status)).await
    }
}
