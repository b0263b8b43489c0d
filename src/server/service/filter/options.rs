//! Choices offered for each select-style criterion.

use std::collections::BTreeSet;

use crate::{
    model::{
        claim::{ClaimDto, ClaimFilterOptionsDto},
        food_listing::{FoodListingDto, FoodListingFilterOptionsDto},
        provider::{ProviderDto, ProviderFilterOptionsDto},
        receiver::{ReceiverDto, ReceiverFilterOptionsDto},
    },
    server::service::filter::ALL,
};

/// `"All"` followed by the sorted, distinct, non-empty values.
pub fn options<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<&str> = values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .collect();

    std::iter::once(ALL.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

pub fn provider_options(snapshot: &[ProviderDto]) -> ProviderFilterOptionsDto {
    // Numeric order, text order would put 10 before 2
    let ids: BTreeSet<i32> = snapshot.iter().map(|p| p.provider_id).collect();

    ProviderFilterOptionsDto {
        provider_id: std::iter::once(ALL.to_string())
            .chain(ids.into_iter().map(|id| id.to_string()))
            .collect(),
    }
}

pub fn receiver_options(snapshot: &[ReceiverDto]) -> ReceiverFilterOptionsDto {
    ReceiverFilterOptionsDto {
        city: options(snapshot.iter().map(|r| r.city.as_str())),
    }
}

pub fn food_listing_options(snapshot: &[FoodListingDto]) -> FoodListingFilterOptionsDto {
    FoodListingFilterOptionsDto {
        location: options(snapshot.iter().map(|f| f.location.as_str())),
        provider_type: options(snapshot.iter().map(|f| f.provider_type.as_str())),
        food_type: options(snapshot.iter().map(|f| f.food_type.as_str())),
        meal_type: options(snapshot.iter().map(|f| f.meal_type.as_str())),
    }
}

pub fn claim_options(snapshot: &[ClaimDto]) -> ClaimFilterOptionsDto {
    ClaimFilterOptionsDto {
        status: options(snapshot.iter().map(|c| c.status.as_str())),
    }
}
