//! Tests for the summary chart endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::ClaimStatus;
use foodshare::{
    model::chart::ChartSeriesDto,
    server::controller::analytics::{get_meal_type_claims, get_top_providers},
};

use super::*;

/// Expect 200 OK with the meal type series
#[tokio::test]
async fn returns_meal_type_series() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .with_claim(factory::mock_claim(1, 1, 1, ClaimStatus::Completed))
        .with_claim(factory::mock_claim(2, 1, 2, ClaimStatus::Pending))
        .build()
        .await?;

    let result = get_meal_type_claims(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let series: ChartSeriesDto = body_json(resp).await;
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].label, "Breakfast");
    assert_eq!(series.points[0].value, 2);

    Ok(())
}

/// Expect 200 OK with providers ranked by total quantity
#[tokio::test]
async fn returns_top_provider_series() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_provider(1)
        .with_mock_provider(2)
        .with_mock_food_listing(1, 1)
        .with_mock_food_listing(2, 2)
        .with_mock_food_listing(3, 2)
        .build()
        .await?;

    let result = get_top_providers(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let series: ChartSeriesDto = body_json(result.unwrap().into_response()).await;
    let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Provider 2", "Provider 1"]);
    assert_eq!(series.points[0].value, 20);

    Ok(())
}
