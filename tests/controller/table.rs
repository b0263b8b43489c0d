//! Tests for the dataset overview endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodshare::{
    model::{report::RowSetDto, table::Table},
    server::controller::table::get_table,
};

use super::*;

/// Expect 200 OK with the table's columns and rows
#[tokio::test]
async fn returns_table_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .with_mock_food_listing(2, 1)
        .build()
        .await?;

    let result = get_table(State(test.into_app_state()), Path(Table::FoodListings)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let snapshot: RowSetDto = body_json(resp).await;
    assert_eq!(snapshot.columns, Table::FoodListings.columns());
    assert_eq!(snapshot.rows.len(), 2);

    Ok(())
}

/// Expect 500 Internal Server Error when the table doesn't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_table(State(test.into_app_state()), Path(Table::Claims)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
