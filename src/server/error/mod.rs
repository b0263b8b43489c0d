//! Error types for the foodshare server.
//!
//! This module provides the error handling system for the server. Domain errors
//! (configuration, validation, missing records) have their own types which are aggregated
//! into [`Error`]. All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for their `Display` and `Error` implementations.

pub mod config;
pub mod record;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, record::RecordError, validation::ValidationError},
};

/// Main error type for the foodshare server.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. `#[from]` conversions allow propagation with the `?` operator, and the
/// `IntoResponse` implementation maps each variant to an HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Input rejected before any write was attempted.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested record or report does not exist.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Database error (query failures, connection issues, malformed SQL).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found - For missing records or unknown reports
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RecordError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client so storage details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
