use chrono::NaiveDate;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::UNKNOWN;

/// A claim prepared for display: identifiers as text, missing values as `"Unknown"`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimDto {
    pub claim_id: i32,
    pub food_id: String,
    pub receiver_id: String,
    pub timestamp: String,
    pub status: String,
}

impl From<entity::claim::Model> for ClaimDto {
    fn from(model: entity::claim::Model) -> Self {
        Self {
            claim_id: model.claim_id,
            food_id: model.food_id.to_string(),
            receiver_id: model.receiver_id.to_string(),
            timestamp: model
                .timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            status: model.status.to_value(),
        }
    }
}

/// Fields accepted when adding a claim
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewClaimDto {
    pub food_id: i32,
    pub receiver_id: i32,
    /// Defaults to today, must not be before today
    pub claim_date: Option<NaiveDate>,
    /// One of `Pending`, `Completed` or `Cancelled`
    pub status: String,
}

/// Fields that can be changed on an existing claim
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ClaimUpdateDto {
    /// One of `Pending`, `Completed` or `Cancelled`
    pub status: String,
}

/// Claim browsing criteria; unset, empty or `"All"` values are ignored
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClaimFilter {
    /// Case-insensitive substring of the receiver ID
    pub receiver_id: Option<String>,
    /// Case-insensitive substring of the food ID
    pub food_id: Option<String>,
    /// Exact status
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimFilterOptionsDto {
    pub status: Vec<String>,
}
