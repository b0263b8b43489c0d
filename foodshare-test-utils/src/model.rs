//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main foodshare crate so fixtures and
//! assertions read the same on both sides.

/// Type alias for provider database model.
pub type ProviderModel = entity::provider::Model;

/// Type alias for receiver database model.
pub type ReceiverModel = entity::receiver::Model;

/// Type alias for food listing database model.
pub type FoodListingModel = entity::food_listing::Model;

/// Type alias for claim database model.
pub type ClaimModel = entity::claim::Model;
