use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        receiver::{
            NewReceiverDto, ReceiverDto, ReceiverFilter, ReceiverFilterOptionsDto,
            ReceiverUpdateDto,
        },
        mutation::{MutationOutcomeDto, NewRecordDto, RecordUpdateDto},
        table::Table,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{browse::BrowseService, mutation::MutationService},
    },
};

pub static RECEIVER_TAG: &str = "receiver";

/// List receivers matching the given filter
#[utoipa::path(
    get,
    path = "/api/receivers",
    tag = RECEIVER_TAG,
    params(ReceiverFilter),
    responses(
        (status = 200, description = "Success when listing receivers", body = Vec<ReceiverDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_receivers(
    State(state): State<AppState>,
    Query(filter): Query<ReceiverFilter>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let receivers = browse_service.receivers(&filter).await?;

    Ok((StatusCode::OK, Json(receivers)))
}

/// Choices for each receiver filter
#[utoipa::path(
    get,
    path = "/api/receivers/options",
    tag = RECEIVER_TAG,
    responses(
        (status = 200, description = "Success when retrieving filter options", body = ReceiverFilterOptionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_receiver_options(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let options = browse_service.receiver_options().await?;

    Ok((StatusCode::OK, Json(options)))
}

/// Add a receiver
#[utoipa::path(
    post,
    path = "/api/receivers",
    tag = RECEIVER_TAG,
    request_body = NewReceiverDto,
    responses(
        (status = 201, description = "Receiver added", body = MutationOutcomeDto),
        (status = 400, description = "Invalid receiver fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_receiver(
    State(state): State<AppState>,
    Json(payload): Json<NewReceiverDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .insert(NewRecordDto::Receivers(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Update the writable fields of a receiver
#[utoipa::path(
    put,
    path = "/api/receivers/{id}",
    tag = RECEIVER_TAG,
    params(("id" = i32, Path, description = "Receiver ID")),
    request_body = ReceiverUpdateDto,
    responses(
        (status = 200, description = "Receiver updated", body = MutationOutcomeDto),
        (status = 400, description = "Invalid receiver fields or ID", body = ErrorDto),
        (status = 404, description = "Receiver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_receiver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReceiverUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .update(id, RecordUpdateDto::Receivers(payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

/// Delete a receiver
#[utoipa::path(
    delete,
    path = "/api/receivers/{id}",
    tag = RECEIVER_TAG,
    params(("id" = i32, Path, description = "Receiver ID")),
    responses(
        (status = 200, description = "Receiver deleted", body = MutationOutcomeDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Receiver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_receiver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service.delete(Table::Receivers, id).await?;

    Ok((StatusCode::OK, Json(outcome)))
}
