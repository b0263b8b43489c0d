//! Field checks run before any write.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ClaimStatus;

use crate::{model::table::Table, server::error::validation::ValidationError};

pub fn quantity(quantity: i32) -> Result<i32, ValidationError> {
    if quantity < 1 {
        return Err(ValidationError::InvalidQuantity(quantity));
    }

    Ok(quantity)
}

/// An ID referring to a row of another table; the row itself is not looked up.
pub fn reference_id(field: &'static str, id: i32) -> Result<i32, ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidId { field, id });
    }

    Ok(id)
}

/// The primary key of the row being updated or deleted.
pub fn target_id(table: Table, id: i32) -> Result<i32, ValidationError> {
    reference_id(table.primary_key(), id)
}

/// Returns the value with surrounding whitespace removed.
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::BlankField(field));
    }

    Ok(value.to_string())
}

pub fn not_before_today(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if date < today {
        return Err(ValidationError::DateInPast { field, date, today });
    }

    Ok(date)
}

/// Parses a claim status, ignoring case and surrounding whitespace.
pub fn status(value: &str) -> Result<ClaimStatus, ValidationError> {
    match value.trim().to_lowercase().as_str() {
        "pending" => Ok(ClaimStatus::Pending),
        "completed" => Ok(ClaimStatus::Completed),
        "cancelled" => Ok(ClaimStatus::Cancelled),
        _ => Err(ValidationError::InvalidStatus(value.to_string())),
    }
}
