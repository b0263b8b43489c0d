use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An entry of the report catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportSummaryDto {
    /// Stable identifier used to run the report
    pub key: String,
    /// Human-readable question the report answers
    pub title: String,
}

/// Ordered rows with named columns
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RowSetDto {
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl RowSetDto {
    /// Values of a single column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&serde_json::Value>> {
        let index = self.columns.iter().position(|c| c == name)?;

        Some(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }
}

/// The result of running a catalog report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportDto {
    pub key: String,
    pub title: String,
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub rows: Vec<Vec<serde_json::Value>>,
}
