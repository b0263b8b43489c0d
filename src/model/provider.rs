use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderDto {
    pub provider_id: i32,
    pub name: String,
    pub provider_type: String,
    pub contact: String,
    pub city: String,
}

impl From<entity::provider::Model> for ProviderDto {
    fn from(model: entity::provider::Model) -> Self {
        Self {
            provider_id: model.provider_id,
            name: model.name,
            provider_type: model.provider_type,
            contact: model.contact,
            city: model.city,
        }
    }
}

/// Fields accepted when adding a provider
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewProviderDto {
    pub name: String,
    pub provider_type: String,
    pub contact: String,
    pub city: String,
}

/// Fields that can be changed on an existing provider
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ProviderUpdateDto {
    pub name: String,
    pub contact: String,
}

/// Provider browsing criteria; unset, empty or `"All"` values are ignored
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProviderFilter {
    /// Case-insensitive substring of the provider name
    pub name: Option<String>,
    /// Exact provider ID
    pub provider_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderFilterOptionsDto {
    pub provider_id: Vec<String>,
}
