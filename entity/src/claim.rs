use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ClaimStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Claim_ID")]
    pub claim_id: i32,
    #[sea_orm(column_name = "Food_ID")]
    pub food_id: i32,
    #[sea_orm(column_name = "Receiver_ID")]
    pub receiver_id: i32,
    #[sea_orm(column_name = "Timestamp")]
    pub timestamp: Option<DateTime>,
    #[sea_orm(column_name = "Status")]
    pub status: ClaimStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
