use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        food_listing::{
            FoodListingDto, FoodListingFilter, FoodListingFilterOptionsDto, FoodListingUpdateDto,
            NewFoodListingDto,
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

pub static FOOD_LISTING_TAG: &str = "food_listing";

/// List food listings matching the given filter
#[utoipa::path(
    get,
    path = "/api/food-listings",
    tag = FOOD_LISTING_TAG,
    params(FoodListingFilter),
    responses(
        (status = 200, description = "Success when listing food listings", body = Vec<FoodListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food_listings(
    State(state): State<AppState>,
    Query(filter): Query<FoodListingFilter>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let food_listings = browse_service.food_listings(&filter).await?;

    Ok((StatusCode::OK, Json(food_listings)))
}

/// Choices for each food listing filter
#[utoipa::path(
    get,
    path = "/api/food-listings/options",
    tag = FOOD_LISTING_TAG,
    responses(
        (status = 200, description = "Success when retrieving filter options", body = FoodListingFilterOptionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_food_listing_options(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let options = browse_service.food_listing_options().await?;

    Ok((StatusCode::OK, Json(options)))
}

/// Add a food listing
#[utoipa::path(
    post,
    path = "/api/food-listings",
    tag = FOOD_LISTING_TAG,
    request_body = NewFoodListingDto,
    responses(
        (status = 201, description = "Food listing added", body = MutationOutcomeDto),
        (status = 400, description = "Invalid food listing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_food_listing(
    State(state): State<AppState>,
    Json(payload): Json<NewFoodListingDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .insert(NewRecordDto::FoodListings(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Update the writable fields of a food listing
#[utoipa::path(
    put,
    path = "/api/food-listings/{id}",
    tag = FOOD_LISTING_TAG,
    params(("id" = i32, Path, description = "Food listing ID")),
    request_body = FoodListingUpdateDto,
    responses(
        (status = 200, description = "Food listing updated", body = MutationOutcomeDto),
        (status = 400, description = "Invalid food listing fields or ID", body = ErrorDto),
        (status = 404, description = "Food listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_food_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FoodListingUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service
        .update(id, RecordUpdateDto::FoodListings(payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

/// Delete a food listing
#[utoipa::path(
    delete,
    path = "/api/food-listings/{id}",
    tag = FOOD_LISTING_TAG,
    params(("id" = i32, Path, description = "Food listing ID")),
    responses(
        (status = 200, description = "Food listing deleted", body = MutationOutcomeDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Food listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_food_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mutation_service = MutationService::new(&state.db);

    let outcome = mutation_service.delete(Table::FoodListings, id).await?;

    Ok((StatusCode::OK, Json(outcome)))
}
