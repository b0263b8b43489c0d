use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    claim::{ClaimUpdateDto, NewClaimDto},
    food_listing::{FoodListingUpdateDto, NewFoodListingDto},
    provider::{NewProviderDto, ProviderUpdateDto},
    receiver::{NewReceiverDto, ReceiverUpdateDto},
    table::Table,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Insert,
    Update,
    Delete,
}

/// Successful result of a single insert, update or delete
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MutationOutcomeDto {
    pub table: Table,
    pub operation: MutationKind,
    /// Primary key of the affected row
    pub id: i32,
    /// Message suitable for showing to an operator
    pub message: String,
}

/// Fields for a new row of any table
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "table", content = "fields", rename_all = "snake_case")]
pub enum NewRecordDto {
    Providers(NewProviderDto),
    Receivers(NewReceiverDto),
    FoodListings(NewFoodListingDto),
    Claims(NewClaimDto),
}

/// Updatable fields of a row of any table
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "table", content = "fields", rename_all = "snake_case")]
pub enum RecordUpdateDto {
    Providers(ProviderUpdateDto),
    Receivers(ReceiverUpdateDto),
    FoodListings(FoodListingUpdateDto),
    Claims(ClaimUpdateDto),
}

impl NewRecordDto {
    pub fn table(&self) -> Table {
        match self {
            Self::Providers(_) => Table::Providers,
            Self::Receivers(_) => Table::Receivers,
            Self::FoodListings(_) => Table::FoodListings,
            Self::Claims(_) => Table::Claims,
        }
    }
}

impl RecordUpdateDto {
    pub fn table(&self) -> Table {
        match self {
            Self::Providers(_) => Table::Providers,
            Self::Receivers(_) => Table::Receivers,
            Self::FoodListings(_) => Table::FoodListings,
            Self::Claims(_) => Table::Claims,
        }
    }
}
