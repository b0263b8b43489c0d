//! Dataset overview and filtered browsing of each table.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        claim::{ClaimDto, ClaimFilter, ClaimFilterOptionsDto},
        food_listing::{FoodListingDto, FoodListingFilter, FoodListingFilterOptionsDto},
        provider::{ProviderDto, ProviderFilter, ProviderFilterOptionsDto},
        receiver::{ReceiverDto, ReceiverFilter, ReceiverFilterOptionsDto},
        report::RowSetDto,
        table::Table,
    },
    server::{
        data::{
            claim::ClaimRepository, food_listing::FoodListingRepository,
            provider::ProviderRepository, receiver::ReceiverRepository, store::Store,
        },
        error::Error,
        service::filter::{apply_filter, options},
    },
};

/// Service reading table snapshots and filtering them in memory.
pub struct BrowseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrowseService<'a> {
    /// Creates a new instance of BrowseService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every row of a table with its columns in persisted order.
    pub async fn table_snapshot(&self, table: Table) -> Result<RowSetDto, Error> {
        tracing::debug!(table = %table, "Fetching table snapshot");

        Ok(Store::new(self.db).fetch_all(table).await?)
    }

    pub async fn providers(&self, filter: &ProviderFilter) -> Result<Vec<ProviderDto>, Error> {
        let snapshot = self.provider_snapshot().await?;

        Ok(apply_filter(&snapshot, filter))
    }

    pub async fn provider_options(&self) -> Result<ProviderFilterOptionsDto, Error> {
        let snapshot = self.provider_snapshot().await?;

        Ok(options::provider_options(&snapshot))
    }

    pub async fn receivers(&self, filter: &ReceiverFilter) -> Result<Vec<ReceiverDto>, Error> {
        let snapshot = self.receiver_snapshot().await?;

        Ok(apply_filter(&snapshot, filter))
    }

    pub async fn receiver_options(&self) -> Result<ReceiverFilterOptionsDto, Error> {
        let snapshot = self.receiver_snapshot().await?;

        Ok(options::receiver_options(&snapshot))
    }

    pub async fn food_listings(
        &self,
        filter: &FoodListingFilter,
    ) -> Result<Vec<FoodListingDto>, Error> {
        let snapshot = self.food_listing_snapshot().await?;

        Ok(apply_filter(&snapshot, filter))
    }

    pub async fn food_listing_options(&self) -> Result<FoodListingFilterOptionsDto, Error> {
        let snapshot = self.food_listing_snapshot().await?;

        Ok(options::food_listing_options(&snapshot))
    }

    pub async fn claims(&self, filter: &ClaimFilter) -> Result<Vec<ClaimDto>, Error> {
        let snapshot = self.claim_snapshot().await?;

        Ok(apply_filter(&snapshot, filter))
    }

    pub async fn claim_options(&self) -> Result<ClaimFilterOptionsDto, Error> {
        let snapshot = self.claim_snapshot().await?;

        Ok(options::claim_options(&snapshot))
    }

    async fn provider_snapshot(&self) -> Result<Vec<ProviderDto>, Error> {
        let providers = ProviderRepository::new(self.db).get_all().await?;

        Ok(providers.into_iter().map(ProviderDto::from).collect())
    }

    async fn receiver_snapshot(&self) -> Result<Vec<ReceiverDto>, Error> {
        let receivers = ReceiverRepository::new(self.db).get_all().await?;

        Ok(receivers.into_iter().map(ReceiverDto::from).collect())
    }

    async fn food_listing_snapshot(&self) -> Result<Vec<FoodListingDto>, Error> {
        let listings = FoodListingRepository::new(self.db).get_all().await?;

        Ok(listings.into_iter().map(FoodListingDto::from).collect())
    }

    async fn claim_snapshot(&self) -> Result<Vec<ClaimDto>, Error> {
        let claims = ClaimRepository::new(self.db).get_all().await?;

        Ok(claims.into_iter().map(ClaimDto::from).collect())
    }
}
