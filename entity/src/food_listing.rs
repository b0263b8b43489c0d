use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "food_listings")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Food_ID")]
    pub food_id: i32,
    #[sea_orm(column_name = "Food_Name")]
    pub food_name: String,
    #[sea_orm(column_name = "Quantity")]
    pub quantity: i32,
    #[sea_orm(column_name = "Expiry_Date")]
    pub expiry_date: Date,
    #[sea_orm(column_name = "Provider_ID")]
    pub provider_id: i32,
    #[sea_orm(column_name = "Provider_Type")]
    pub provider_type: String,
    #[sea_orm(column_name = "Location")]
    pub location: String,
    #[sea_orm(column_name = "Food_Type")]
    pub food_type: String,
    #[sea_orm(column_name = "Meal_Type")]
    pub meal_type: String,
}

// Provider_ID is a plain column; deleting a provider does not touch its listings.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
