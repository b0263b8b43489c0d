pub use super::claim::Entity as Claim;
pub use super::food_listing::Entity as FoodListing;
pub use super::provider::Entity as Provider;
pub use super::receiver::Entity as Receiver;
