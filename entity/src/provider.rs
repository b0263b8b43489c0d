use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "providers")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Provider_ID")]
    pub provider_id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Provider_Type")]
    pub provider_type: String,
    #[sea_orm(column_name = "Contact")]
    pub contact: String,
    #[sea_orm(column_name = "City")]
    pub city: String,
}

// Listings keep their Provider_ID after the provider is deleted, so no
// foreign key is declared here.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
