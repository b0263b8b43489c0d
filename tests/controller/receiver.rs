//! Tests for the receiver endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodshare::{
    model::{
        receiver::{NewReceiverDto, ReceiverDto, ReceiverFilter, ReceiverUpdateDto},
        table::Table,
    },
    server::controller::receiver::{
        create_receiver, delete_receiver, get_receiver_options, get_receivers, update_receiver,
    },
};

use super::*;

/// Expect 200 OK with receivers in the selected city
#[tokio::test]
async fn lists_receivers_in_city() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_receiver(1)
        .with_receiver(entity::receiver::Model {
            city: "Lake Michael".to_string(),
            ..factory::mock_receiver(2)
        })
        .build()
        .await?;

    let filter = ReceiverFilter {
        name: None,
        city: Some("Lake Michael".to_string()),
    };
    let result = get_receivers(State(test.into_app_state()), Query(filter)).await;

    assert!(result.is_ok());
    let receivers: Vec<ReceiverDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(receivers.len(), 1);
    assert_eq!(receivers[0].receiver_id, 2);

    Ok(())
}

/// Expect 200 OK with All followed by sorted cities
#[tokio::test]
async fn lists_receiver_options() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_receiver(1)
        .with_receiver(entity::receiver::Model {
            city: "Lake Michael".to_string(),
            ..factory::mock_receiver(2)
        })
        .build()
        .await?;

    let result = get_receiver_options(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let options: serde_json::Value = body_json(result.unwrap().into_response()).await;
    assert_eq!(
        options["city"],
        serde_json::json!(["All", "Lake Michael", "New Carol"])
    );

    Ok(())
}

/// Expect 201 Created, then the receiver to appear in the dataset overview
#[tokio::test]
async fn creates_receiver() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let payload = NewReceiverDto {
        name: "Community Kitchen".to_string(),
        receiver_type: "Charity".to_string(),
        contact: "555-0300".to_string(),
        city: "New Carol".to_string(),
    };
    let result = create_receiver(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);
    let snapshot = foodshare::server::service::browse::BrowseService::new(&test.db)
        .table_snapshot(Table::Receivers)
        .await
        .unwrap();
    assert_eq!(snapshot.rows.len(), 1);

    Ok(())
}

/// Expect 400 Bad Request for an ID below 1
#[tokio::test]
async fn update_rejects_non_positive_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let payload = ReceiverUpdateDto {
        name: "Renamed".to_string(),
        contact: String::new(),
    };
    let result = update_receiver(State(test.into_app_state()), Path(0), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found when deleting a receiver that doesn't exist
#[tokio::test]
async fn delete_returns_not_found_for_nonexistent_receiver() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let result = delete_receiver(State(test.into_app_state()), Path(9)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
