use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        provider::{
            NewProviderDto, ProviderDto, ProviderFilter, ProviderFilterOptionsDto,
            ProviderUpdateDto,
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

pub static PROVIDER_TAG: &str = "provider";

/// List providers matching the given filter
#[utoipa::path(
    get,
    path = "/api/providers",
    tag = PROVIDER_TAG,
    params(ProviderFilter),
    responses(
        (status = 200, description = "Success when listing providers", body = Vec<ProviderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_providers(
    State(state): State<AppState>,
    Query(filter): Query<ProviderFilter>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let providers = browse_service.providers(&filter).await?;

    Ok((StatusCode::OK, Json(providers)))
}

/// Choices for each provider filter
#[utoipa::path(
    get,
    path = "/api/providers/options",
    tag = PROVIDER_TAG,
    responses(
        (status = 200, description = "Success when retrieving filter options", body = ProviderFilterOptionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_provider_options(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let options = browse_service.provider_options().await?;

    Ok((StatusCode::OK, Json(options)))
}

/// Add a provider
#[utoipa::path(
    post,
    path = "/api/providers",
    tag = PROVIDER_TAG,
    request_body = NewProviderDto,
    responses(
        (status = 201, description = "Provider added", body = MutationOutcomeDto),
        (status = 400, description = "Invalid provider fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_provider(
    State(state): State<AppState>,
    Json(payload): Json<NewProviderDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .insert(NewRecordDto::Providers(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Update the writable fields of a provider
#[utoipa::path(
    put,
    path = "/api/providers/{id}",
    tag = PROVIDER_TAG,
    params(("id" = i32, Path, description = "Provider ID")),
    request_body = ProviderUpdateDto,
    responses(
        (status = 200, description = "Provider updated", body = MutationOutcomeDto),
        (status = 400, description = "Invalid provider fields or ID", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProviderUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .update(id, RecordUpdateDto::Providers(payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

/// Delete a provider
#[utoipa::path(
    delete,
    path = "/api/providers/{id}",
    tag = PROVIDER_TAG,
    params(("id" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Provider deleted", body = MutationOutcomeDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Provider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_provider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service.delete(Table::Providers, id).await?;

    Ok((StatusCode::OK, Json(outcome)))
}
