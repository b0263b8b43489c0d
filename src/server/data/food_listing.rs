use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::food_listing::NewFoodListingDto;

pub struct FoodListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FoodListingRepository<'a, C> {
    /// Creates a new instance of [`FoodListingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new food listing
    ///
    /// The provider ID is stored as given, no check is made that the provider exists.
    pub async fn create(
        &self,
        listing: NewFoodListingDto,
    ) -> Result<entity::food_listing::Model, DbErr> {
        let listing = entity::food_listing::ActiveModel {
            food_name: ActiveValue::Set(listing.food_name),
            quantity: ActiveValue::Set(listing.quantity),
            expiry_date: ActiveValue::Set(listing.expiry_date),
            provider_id: ActiveValue::Set(listing.provider_id),
            provider_type: ActiveValue::Set(listing.provider_type),
            location: ActiveValue::Set(listing.location),
            food_type: ActiveValue::Set(listing.food_type),
            meal_type: ActiveValue::Set(listing.meal_type),
            ..Default::default()
        };

        listing.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::food_listing::Model>, DbErr> {
        entity::prelude::FoodListing::find()
            .order_by_asc(entity::food_listing::Column::FoodId)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        food_id: i32,
    ) -> Result<Option<entity::food_listing::Model>, DbErr> {
        entity::prelude::FoodListing::find_by_id(food_id)
            .one(self.db)
            .await
    }

    /// Updates quantity and expiry date, returns `None` if the listing doesn't exist
    pub async fn update(
        &self,
        food_id: i32,
        quantity: i32,
        expiry_date: NaiveDate,
    ) -> Result<Option<entity::food_listing::Model>, DbErr> {
        let listing = match self.get_by_id(food_id).await? {
            Some(listing) => listing,
            None => return Ok(None),
        };

        let mut listing_am = listing.into_active_model();
        listing_am.quantity = ActiveValue::Set(quantity);
        listing_am.expiry_date = ActiveValue::Set(expiry_date);

        let listing = listing_am.update(self.db).await?;

        Ok(Some(listing))
    }

    /// Deletes a food listing
    ///
    /// Claims on the listing are left in place. Returns OK regardless of the listing
    /// existing, to confirm the deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, food_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FoodListing::delete_by_id(food_id)
            .exec(self.db)
            .await
    }
}
