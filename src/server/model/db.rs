//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used across the data and service layers.

/// A food donor (restaurant, grocery store, supermarket, ...).
///
/// # Fields (from `entity::provider::Model`)
/// - `provider_id` - Primary key
/// - `name`, `provider_type`, `contact`, `city`
pub type ProviderModel = entity::provider::Model;

/// An organisation or individual receiving food.
///
/// # Fields (from `entity::receiver::Model`)
/// - `receiver_id` - Primary key
/// - `name`, `receiver_type`, `contact`, `city`
pub type ReceiverModel = entity::receiver::Model;

/// A quantity of surplus food offered by a provider.
///
/// `provider_id` is a plain column, the provider may no longer exist.
pub type FoodListingModel = entity::food_listing::Model;

/// A receiver's claim on a food listing.
///
/// `timestamp` is `None` when no claim date was recorded.
pub type ClaimModel = entity::claim::Model;
