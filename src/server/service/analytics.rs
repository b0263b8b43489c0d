//! Data behind the two summary charts.
//!
//! Both series are computed in memory from table snapshots, the same way the browse
//! views read them. A missing join partner shows up as `"Unknown"` rather than
//! dropping the row: a claim whose listing was deleted still counts toward the meal
//! type chart, under `"Unknown"`.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        chart::{ChartPointDto, ChartSeriesDto},
        UNKNOWN,
    },
    server::{
        data::{
            claim::ClaimRepository, food_listing::FoodListingRepository,
            provider::ProviderRepository,
        },
        error::Error,
        model::db::{ClaimModel, FoodListingModel, ProviderModel},
    },
};

/// Number of bars in the top providers chart.
pub const TOP_PROVIDER_LIMIT: usize = 10;

/// Claims per meal type of the claimed listing, most claimed first.
///
/// Claims whose listing no longer exists are counted under `"Unknown"`. Ties are ordered
/// by meal type.
pub fn most_claimed_meal_types(
    claims: &[ClaimModel],
    listings: &[FoodListingModel],
) -> ChartSeriesDto {
    let meal_types: HashMap<i32, &str> = listings
        .iter()
        .map(|listing| (listing.food_id, listing.meal_type.as_str()))
        .collect();

    let mut counts: HashMap<&str, i64> = HashMap::new();
    for claim in claims {
        let meal_type = meal_types
            .get(&claim.food_id)
            .copied()
            .filter(|meal_type| !meal_type.is_empty())
            .unwrap_or(UNKNOWN);
        *counts.entry(meal_type).or_default() += 1;
    }

    let mut points: Vec<ChartPointDto> = counts
        .into_iter()
        .map(|(label, value)| ChartPointDto {
            label: label.to_string(),
            value,
        })
        .collect();
    points.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));

    ChartSeriesDto {
        title: "Most Claimed Meal Types".to_string(),
        x_label: "Meal Type".to_string(),
        y_label: "Number of Claims".to_string(),
        points,
    }
}

/// Total listed quantity per provider, largest first, limited to [`TOP_PROVIDER_LIMIT`].
///
/// Quantities are grouped by provider ID; a provider missing from `providers` is labelled
/// `"Unknown"`. Ties are ordered by provider ID.
pub fn top_donating_providers(
    listings: &[FoodListingModel],
    providers: &[ProviderModel],
) -> ChartSeriesDto {
    let names: HashMap<i32, &str> = providers
        .iter()
        .map(|provider| (provider.provider_id, provider.name.as_str()))
        .collect();

    let mut totals: HashMap<i32, i64> = HashMap::new();
    for listing in listings {
        *totals.entry(listing.provider_id).or_default() += i64::from(listing.quantity);
    }

    let mut totals: Vec<(i32, i64)> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let points = totals
        .into_iter()
        .take(TOP_PROVIDER_LIMIT)
        .map(|(provider_id, value)| ChartPointDto {
            label: names
                .get(&provider_id)
                .copied()
                .unwrap_or(UNKNOWN)
                .to_string(),
            value,
        })
        .collect();

    ChartSeriesDto {
        title: "Top 10 Food Donating Providers".to_string(),
        x_label: "Provider Name".to_string(),
        y_label: "Total Quantity Donated".to_string(),
        points,
    }
}

/// Service loading the snapshots for the summary charts.
pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of AnalyticsService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn most_claimed_meal_types(&self) -> Result<ChartSeriesDto, Error> {
        let claims = ClaimRepository::new(self.db).get_all().await?;
        let listings = FoodListingRepository::new(self.db).get_all().await?;

        Ok(most_claimed_meal_types(&claims, &listings))
    }

    pub async fn top_donating_providers(&self) -> Result<ChartSeriesDto, Error> {
        let listings = FoodListingRepository::new(self.db).get_all().await?;
        let providers = ProviderRepository::new(self.db).get_all().await?;

        Ok(top_donating_providers(&listings, &providers))
    }
}
