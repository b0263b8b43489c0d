//! Tests for the claim endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ClaimStatus;
use foodshare::{
    model::claim::{ClaimDto, ClaimFilter, ClaimUpdateDto, NewClaimDto},
    server::controller::claim::{
        create_claim, delete_claim, get_claim_options, get_claims, update_claim,
    },
};

use super::*;

/// Expect 200 OK with claims shown as text, missing timestamps as Unknown
#[tokio::test]
async fn lists_claims_for_display() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_claim(entity::claim::Model {
            timestamp: None,
            ..factory::mock_claim(1, 12, 3, ClaimStatus::Pending)
        })
        .with_claim(factory::mock_claim(2, 4, 30, ClaimStatus::Completed))
        .build()
        .await?;

    let filter = ClaimFilter {
        receiver_id: Some("3".to_string()),
        status: Some("Pending".to_string()),
        ..Default::default()
    };
    let result = get_claims(State(test.into_app_state()), Query(filter)).await;

    assert!(result.is_ok());
    let claims: Vec<ClaimDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].food_id, "12");
    assert_eq!(claims[0].timestamp, "Unknown");

    Ok(())
}

/// Expect 200 OK with the statuses present
#[tokio::test]
async fn lists_claim_options() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_claim(factory::mock_claim(1, 1, 1, ClaimStatus::Completed))
        .build()
        .await?;

    let result = get_claim_options(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let options: serde_json::Value = body_json(result.unwrap().into_response()).await;
    assert_eq!(options["status"], serde_json::json!(["All", "Completed"]));

    Ok(())
}

/// Expect 201 Created for a claim dated today
#[tokio::test]
async fn creates_claim() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let payload = NewClaimDto {
        food_id: 1,
        receiver_id: 2,
        claim_date: None,
        status: "Pending".to_string(),
    };
    let result = create_claim(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request for a status outside Pending, Completed and Cancelled
#[tokio::test]
async fn rejects_unknown_status_on_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_claim(factory::mock_claim(1, 1, 1, ClaimStatus::Pending))
        .build()
        .await?;

    let payload = ClaimUpdateDto {
        status: "Shipped".to_string(),
    };
    let result = update_claim(State(test.into_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when updating the status of an existing claim
#[tokio::test]
async fn updates_claim_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_claim(factory::mock_claim(1, 1, 1, ClaimStatus::Pending))
        .build()
        .await?;

    let payload = ClaimUpdateDto {
        status: "cancelled".to_string(),
    };
    let result = update_claim(State(test.into_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when deleting a claim that doesn't exist
#[tokio::test]
async fn delete_returns_not_found_for_nonexistent_claim() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let result = delete_claim(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
