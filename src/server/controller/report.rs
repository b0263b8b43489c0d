use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{ReportDto, ReportSummaryDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static REPORT_TAG: &str = "report";

/// List the predefined reports in menu order
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Success when listing reports", body = Vec<ReportSummaryDto>)
    ),
)]
pub async fn list_reports() -> impl IntoResponse {
    (StatusCode::OK, Json(CatalogService::list_report_names()))
}

/// Run a predefined report by key or title
#[utoipa::path(
    get,
    path = "/api/reports/{key}",
    tag = REPORT_TAG,
    params(("key" = String, Path, description = "Report key or title")),
    responses(
        (status = 200, description = "Success when running the report", body = ReportDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_report(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let report = catalog_service.run_report(&key).await?;

    Ok((StatusCode::OK, Json(report)))
}
