use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReceiverDto {
    pub receiver_id: i32,
    pub name: String,
    pub receiver_type: String,
    pub contact: String,
    pub city: String,
}

impl From<entity::receiver::Model> for ReceiverDto {
    fn from(model: entity::receiver::Model) -> Self {
        Self {
            receiver_id: model.receiver_id,
            name: model.name,
            receiver_type: model.receiver_type,
            contact: model.contact,
            city: model.city,
        }
    }
}

/// Fields accepted when adding a receiver
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewReceiverDto {
    pub name: String,
    pub receiver_type: String,
    pub contact: String,
    pub city: String,
}

/// Fields that can be changed on an existing receiver
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ReceiverUpdateDto {
    pub name: String,
    pub contact: String,
}

/// Receiver browsing criteria; unset, empty or `"All"` values are ignored
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReceiverFilter {
    /// Case-insensitive substring of the receiver name
    pub name: Option<String>,
    /// Exact city
    pub city: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReceiverFilterOptionsDto {
    pub city: Vec<String>,
}
