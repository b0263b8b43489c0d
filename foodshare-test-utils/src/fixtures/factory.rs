//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating models with standard test values. These are
//! in-memory model instances that don't require database interaction. Override individual
//! fields with struct update syntax when a test needs something specific.

use chrono::{Days, NaiveTime, Utc};
use entity::sea_orm_active_enums::ClaimStatus;

use crate::model::{ClaimModel, FoodListingModel, ProviderModel, ReceiverModel};

/// City used by default for providers and food listings.
pub static TEST_CITY: &str = "East Sheena";

/// Create a mock provider model.
///
/// # Arguments
/// - `provider_id` - Primary key of the provider
pub fn mock_provider(provider_id: i32) -> ProviderModel {
    ProviderModel {
        provider_id,
        name: format!("Provider {}", provider_id),
        provider_type: "Restaurant".to_string(),
        contact: "555-0100".to_string(),
        city: TEST_CITY.to_string(),
    }
}

/// Create a mock receiver model.
///
/// # Arguments
/// - `receiver_id` - Primary key of the receiver
pub fn mock_receiver(receiver_id: i32) -> ReceiverModel {
    ReceiverModel {
        receiver_id,
        name: format!("Receiver {}", receiver_id),
        receiver_type: "NGO".to_string(),
        contact: "555-0200".to_string(),
        city: "New Carol".to_string(),
    }
}

/// Create a mock food listing model expiring one week from today.
///
/// # Arguments
/// - `food_id` - Primary key of the listing
/// - `provider_id` - Provider the listing belongs to
pub fn mock_food_listing(food_id: i32, provider_id: i32) -> FoodListingModel {
    let today = Utc::now().date_naive();

    FoodListingModel {
        food_id,
        food_name: "Bread".to_string(),
        quantity: 10,
        expiry_date: today + Days::new(7),
        provider_id,
        provider_type: "Restaurant".to_string(),
        location: TEST_CITY.to_string(),
        food_type: "Vegetarian".to_string(),
        meal_type: "Breakfast".to_string(),
    }
}

/// Create a mock claim model timestamped at midnight today.
///
/// # Arguments
/// - `claim_id` - Primary key of the claim
/// - `food_id` - Claimed food listing
/// - `receiver_id` - Receiver making the claim
/// - `status` - Claim status
pub fn mock_claim(
    claim_id: i32,
    food_id: i32,
    receiver_id: i32,
    status: ClaimStatus,
) -> ClaimModel {
    ClaimModel {
        claim_id,
        food_id,
        receiver_id,
        timestamp: Some(Utc::now().date_naive().and_time(NaiveTime::MIN)),
        status,
    }
}
