use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input rejected by the mutation service before anything is written.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),
    #[error("{field} must be at least 1, got {id}")]
    InvalidId { field: &'static str, id: i32 },
    #[error("{0} must not be blank")]
    BlankField(&'static str),
    #[error("{field} {date} is before today ({today})")]
    DateInPast {
        field: &'static str,
        date: NaiveDate,
        today: NaiveDate,
    },
    #[error("Invalid claim status {0:?}, expected one of Pending, Completed or Cancelled")]
    InvalidStatus(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
