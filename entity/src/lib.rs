pub mod prelude;

pub mod claim;
pub mod food_listing;
pub mod provider;
pub mod receiver;
pub mod sea_orm_active_enums;
