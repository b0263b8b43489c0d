use crate::{
    model::{
        food_listing::{FoodListingUpdateDto, NewFoodListingDto},
        mutation::{MutationKind, MutationOutcomeDto},
        table::Table,
    },
    server::{
        data::food_listing::FoodListingRepository,
        error::{record::RecordError, Error},
        service::mutation::{outcome, updated, validate, MutationService},
    },
};

impl<'a> MutationService<'a> {
    /// New listings may carry any expiry date, only updates are held to today or later.
    pub(super) async fn insert_food_listing(
        &self,
        listing: NewFoodListingDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let listing = NewFoodListingDto {
            food_name: validate::required_text("Food_Name", &listing.food_name)?,
            quantity: validate::quantity(listing.quantity)?,
            provider_id: validate::reference_id("Provider_ID", listing.provider_id)?,
            ..listing
        };

        let listing = FoodListingRepository::new(self.db).create(listing).await?;

        Ok(outcome(
            Table::FoodListings,
            MutationKind::Insert,
            listing.food_id,
            format!("Food '{}' added successfully", listing.food_name),
        ))
    }

    pub(super) async fn update_food_listing(
        &self,
        food_id: i32,
        changes: FoodListingUpdateDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let food_id = validate::target_id(Table::FoodListings, food_id)?;
        let quantity = validate::quantity(changes.quantity)?;
        let expiry_date =
            validate::not_before_today("Expiry_Date", changes.expiry_date, self.today)?;

        FoodListingRepository::new(self.db)
            .update(food_id, quantity, expiry_date)
            .await?
            .ok_or(RecordError::NotFound {
                table: Table::FoodListings,
                id: food_id,
            })?;

        Ok(updated(Table::FoodListings, food_id))
    }
}
