//! Predefined analytical reports.
//!
//! The catalog is data: an ordered list of [`definitions::ReportDefinition`]s, each a
//! parameterless SQL query with its output columns. [`CatalogService`] lists the reports
//! and runs one by key or title against the store.

pub mod definitions;


use sea_orm::DatabaseConnection;

use crate::{
    model::report::{ReportDto, ReportSummaryDto},
    server::{
        data::store::Store,
        error::{record::RecordError, Error},
        service::catalog::definitions::{find_report, REPORTS},
    },
};

/// Service listing and running the catalog reports.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Report keys and titles in menu order.
    pub fn list_report_names() -> Vec<ReportSummaryDto> {
        REPORTS
            .iter()
            .map(|report| ReportSummaryDto {
                key: report.key.to_string(),
                title: report.title.to_string(),
            })
            .collect()
    }

    /// Runs a report.
    ///
    /// # Arguments
    /// - `name` - Report key or title
    ///
    /// # Returns
    /// - `Ok(ReportDto)` - Columns and rows in the report's own order
    /// - `Err(Error::RecordError)` - No report has this key or title
    /// - `Err(Error::DbErr)` - The query failed
    pub async fn run_report(&self, name: &str) -> Result<ReportDto, Error> {
        let report =
            find_report(name).ok_or_else(|| RecordError::UnknownReport(name.to_string()))?;

        tracing::debug!(report = report.key, "Running catalog report");

        let rows = Store::new(self.db)
            .query_rows(report.sql, report.columns, Vec::new())
            .await?;

        Ok(ReportDto {
            key: report.key.to_string(),
            title: report.title.to_string(),
            columns: rows.columns,
            rows: rows.rows,
        })
    }
}
