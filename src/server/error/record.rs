use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, table::Table};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("{} ID {id} not found", table.record_label())]
    NotFound { table: Table, id: i32 },
    #[error("Unknown report: {0:?}")]
    UnknownReport(String),
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
