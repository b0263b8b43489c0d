//! Tests for the report catalog endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use foodshare::{
    model::report::{ReportDto, ReportSummaryDto},
    server::controller::report::{list_reports, run_report},
};
use serde_json::json;

use super::*;

/// Expect 200 OK with the full menu
#[tokio::test]
async fn lists_reports() -> Result<(), TestError> {
    let resp = list_reports().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let reports: Vec<ReportSummaryDto> = body_json(resp).await;
    assert_eq!(reports.len(), 24);

    Ok(())
}

/// Expect 200 OK with the report's rows
#[tokio::test]
async fn runs_report_by_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .with_mock_food_listing(2, 1)
        .build()
        .await?;

    let result = run_report(
        State(test.into_app_state()),
        Path("listings_per_city".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let report: ReportDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(report.columns, vec!["City", "Total_Listings"]);
    assert_eq!(report.rows, vec![vec![json!(factory::TEST_CITY), json!(2)]]);

    Ok(())
}

/// Expect 404 Not Found for a report that isn't in the catalog
#[tokio::test]
async fn returns_not_found_for_unknown_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let result = run_report(
        State(test.into_app_state()),
        Path("food_waste_by_weekday".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
