//! Insert, update and delete against a single table.
//!
//! Every operation validates its input before touching the database, performs exactly one
//! write (committed immediately) and reports the affected primary key. Updates and deletes
//! of an ID that doesn't exist fail with [`RecordError::NotFound`]. Parent rows are never
//! looked up and deletes never cascade.

mod claim;
mod food_listing;
mod provider;
mod receiver;
pub mod validate;

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        mutation::{MutationKind, MutationOutcomeDto, NewRecordDto, RecordUpdateDto},
        table::Table,
    },
    server::{
        data::{
            claim::ClaimRepository, food_listing::FoodListingRepository,
            provider::ProviderRepository, receiver::ReceiverRepository,
        },
        error::{record::RecordError, Error},
    },
};

/// Service applying validated mutations.
pub struct MutationService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> MutationService<'a> {
    /// Creates a new instance of MutationService using the current UTC date for date checks.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_today(db, Utc::now().date_naive())
    }

    /// Creates a new instance of MutationService with a fixed date for "today".
    pub fn with_today(db: &'a DatabaseConnection, today: NaiveDate) -> Self {
        Self { db, today }
    }

    /// Inserts a new row.
    ///
    /// # Returns
    /// - `Ok(MutationOutcomeDto)` - Row inserted, `id` is its assigned primary key
    /// - `Err(Error::ValidationError)` - A field was rejected, nothing was written
    /// - `Err(Error::DbErr)` - The insert failed
    pub async fn insert(&self, record: NewRecordDto) -> Result<MutationOutcomeDto, Error> {
        let table = record.table();
        let outcome = match record {
            NewRecordDto::Providers(provider) => self.insert_provider(provider).await?,
            NewRecordDto::Receivers(receiver) => self.insert_receiver(receiver).await?,
            NewRecordDto::FoodListings(listing) => self.insert_food_listing(listing).await?,
            NewRecordDto::Claims(claim) => self.insert_claim(claim).await?,
        };

        tracing::info!(table = %table, id = outcome.id, "Inserted record");

        Ok(outcome)
    }

    /// Updates the writable fields of an existing row.
    ///
    /// # Returns
    /// - `Ok(MutationOutcomeDto)` - Row updated
    /// - `Err(Error::ValidationError)` - A field or the ID was rejected, nothing was written
    /// - `Err(Error::RecordError)` - No row has this ID
    /// - `Err(Error::DbErr)` - The update failed
    pub async fn update(
        &self,
        id: i32,
        changes: RecordUpdateDto,
    ) -> Result<MutationOutcomeDto, Error> {
        let table = changes.table();
        let outcome = match changes {
            RecordUpdateDto::Providers(changes) => self.update_provider(id, changes).await?,
            RecordUpdateDto::Receivers(changes) => self.update_receiver(id, changes).await?,
            RecordUpdateDto::FoodListings(changes) => self.update_food_listing(id, changes).await?,
            RecordUpdateDto::Claims(changes) => self.update_claim(id, changes).await?,
        };

        tracing::info!(table = %table, id = outcome.id, "Updated record");

        Ok(outcome)
    }

    /// Deletes a row by primary key.
    ///
    /// Rows of other tables referring to it are left as they are.
    ///
    /// # Returns
    /// - `Ok(MutationOutcomeDto)` - Row deleted
    /// - `Err(Error::ValidationError)` - ID below 1
    /// - `Err(Error::RecordError)` - No row has this ID
    /// - `Err(Error::DbErr)` - The delete failed
    pub async fn delete(&self, table: Table, id: i32) -> Result<MutationOutcomeDto, Error> {
        let id = validate::target_id(table, id)?;

        let result = match table {
            Table::Providers => ProviderRepository::new(self.db).delete(id).await?,
            Table::Receivers => ReceiverRepository::new(self.db).delete(id).await?,
            Table::FoodListings => FoodListingRepository::new(self.db).delete(id).await?,
            Table::Claims => ClaimRepository::new(self.db).delete(id).await?,
        };

        if result.rows_affected == 0 {
            return Err(RecordError::NotFound { table, id }.into());
        }

        tracing::info!(table = %table, id = id, "Deleted record");

        Ok(outcome(
            table,
            MutationKind::Delete,
            id,
            format!("{} ID {} deleted successfully", table.record_label(), id),
        ))
    }
}

fn outcome(table: Table, operation: MutationKind, id: i32, message: String) -> MutationOutcomeDto {
    MutationOutcomeDto {
        table,
        operation,
        id,
        message,
    }
}

fn updated(table: Table, id: i32) -> MutationOutcomeDto {
    outcome(
        table,
        MutationKind::Update,
        id,
        format!("{} ID {} updated successfully", table.record_label(), id),
    )
}
