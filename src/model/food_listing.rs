use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodListingDto {
    pub food_id: i32,
    pub food_name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub provider_id: i32,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

impl From<entity::food_listing::Model> for FoodListingDto {
    fn from(model: entity::food_listing::Model) -> Self {
        Self {
            food_id: model.food_id,
            food_name: model.food_name,
            quantity: model.quantity,
            expiry_date: model.expiry_date,
            provider_id: model.provider_id,
            provider_type: model.provider_type,
            location: model.location,
            food_type: model.food_type,
            meal_type: model.meal_type,
        }
    }
}

/// Fields accepted when adding a food listing
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewFoodListingDto {
    pub food_name: String,
    /// Must be at least 1
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub provider_id: i32,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

/// Fields that can be changed on an existing food listing
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FoodListingUpdateDto {
    /// Must be at least 1
    pub quantity: i32,
    /// Must not be before today
    pub expiry_date: NaiveDate,
}

/// Food listing browsing criteria; every set value must match exactly
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FoodListingFilter {
    pub location: Option<String>,
    pub provider_type: Option<String>,
    pub food_type: Option<String>,
    pub meal_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodListingFilterOptionsDto {
    pub location: Vec<String>,
    pub provider_type: Vec<String>,
    pub food_type: Vec<String>,
    pub meal_type: Vec<String>,
}
