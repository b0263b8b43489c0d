use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        claim::{ClaimDto, ClaimFilter, ClaimFilterOptionsDto, ClaimUpdateDto, NewClaimDto},
        mutation::{MutationOutcomeDto, NewRecordDto, RecordUpdateDto},
        table::Table,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{browse::BrowseService, mutation::MutationService},
    },
};

pub static CLAIM_TAG: &str = "claim";

/// List claims matching the given filter
#[utoipa::path(
    get,
    path = "/api/claims",
    tag = CLAIM_TAG,
    params(ClaimFilter),
    responses(
        (status = 200, description = "Success when listing claims", body = Vec<ClaimDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_claims(
    State(state): State<AppState>,
    Query(filter): Query<ClaimFilter>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let claims = browse_service.claims(&filter).await?;

    Ok((StatusCode::OK, Json(claims)))
}

/// Choices for each claim filter
#[utoipa::path(
    get,
    path = "/api/claims/options",
    tag = CLAIM_TAG,
    responses(
        (status = 200, description = "Success when retrieving filter options", body = ClaimFilterOptionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_claim_options(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let options = browse_service.claim_options().await?;

    Ok((StatusCode::OK, Json(options)))
}

/// Add a claim
#[utoipa::path(
    post,
    path = "/api/claims",
    tag = CLAIM_TAG,
    request_body = NewClaimDto,
    responses(
        (status = 201, description = "Claim added", body = MutationOutcomeDto),
        (status = 400, description = "Invalid claim fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_claim(
    State(state): State<AppState>,
    Json(payload): Json<NewClaimDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .insert(NewRecordDto::Claims(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Update the writable fields of a claim
#[utoipa::path(
    put,
    path = "/api/claims/{id}",
    tag = CLAIM_TAG,
    params(("id" = i32, Path, description = "Claim ID")),
    request_body = ClaimUpdateDto,
    responses(
        (status = 200, description = "Claim updated", body = MutationOutcomeDto),
        (status = 400, description = "Invalid claim fields or ID", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ClaimUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .update(id, RecordUpdateDto::Claims(payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

/// Delete a claim
#[utoipa::path(
    delete,
    path = "/api/claims/{id}",
    tag = CLAIM_TAG,
    params(("id" = i32, Path, description = "Claim ID")),
    responses(
        (status = 200, description = "Claim deleted", body = MutationOutcomeDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Claim not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service.delete(Table::Claims, id).await?;

    Ok((StatusCode::OK, Json(outcome)))
}
