use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, report::RowSetDto, table::Table},
    server::{error::Error, model::app::AppState, service::browse::BrowseService},
};

pub static TABLE_TAG: &str = "table";

/// Every row of a table, with columns in their stored order
#[utoipa::path(
    get,
    path = "/api/tables/{table}",
    tag = TABLE_TAG,
    params(("table" = Table, Path, description = "One of providers, receivers, food_listings or claims")),
    responses(
        (status = 200, description = "Success when retrieving the table", body = RowSetDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table(
    State(state): State<AppState>,
    Path(table): Path<Table>,
) -> Result<impl IntoResponse, Error> {
    let browse_service = BrowseService::new(&state.db);

    let snapshot = browse_service.table_snapshot(table).await?;

    Ok((StatusCode::OK, Json(snapshot)))
}
