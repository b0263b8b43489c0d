use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, chart::ChartSeriesDto},
    server::{error::Error, model::app::AppState, service::analytics::AnalyticsService},
};

pub static ANALYTICS_TAG: &str = "analytics";

/// Claim counts per meal type
#[utoipa::path(
    get,
    path = "/api/analytics/meal-types",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Success when computing the series", body = ChartSeriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_meal_type_claims(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let analytics_service = AnalyticsService::new(&state.db);

    let series = analytics_service.most_claimed_meal_types().await?;

    Ok((StatusCode::OK, Json(series)))
}

/// Top 10 providers by total listed quantity
#[utoipa::path(
    get,
    path = "/api/analytics/top-providers",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Success when computing the series", body = ChartSeriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_providers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let analytics_service = AnalyticsService::new(&state.db);

    let series = analytics_service.top_donating_providers().await?;

    Ok((StatusCode::OK, Json(series)))
}
