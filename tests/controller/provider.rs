//! Tests for the provider endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodshare::{
    model::{
        mutation::MutationOutcomeDto,
        provider::{NewProviderDto, ProviderDto, ProviderFilter, ProviderUpdateDto},
    },
    server::controller::provider::{
        create_provider, delete_provider, get_provider_options, get_providers, update_provider,
    },
};

use super::*;

/// Expect 200 OK with only the providers matching the name filter
#[tokio::test]
async fn lists_filtered_providers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_provider(1)
        .with_provider(entity::provider::Model {
            name: "Barry Group".to_string(),
            ..factory::mock_provider(2)
        })
        .build()
        .await?;

    let filter = ProviderFilter {
        name: Some("barry".to_string()),
        provider_id: None,
    };
    let result = get_providers(State(test.into_app_state()), Query(filter)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let providers: Vec<ProviderDto> = body_json(resp).await;
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].provider_id, 2);

    Ok(())
}

/// Expect 200 OK with All followed by provider IDs
#[tokio::test]
async fn lists_provider_options() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_provider(1)
        .build()
        .await?;

    let result = get_provider_options(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let options: serde_json::Value = body_json(resp).await;
    assert_eq!(options["provider_id"], serde_json::json!(["All", "1"]));

    Ok(())
}

/// Expect 201 Created with the new provider's ID
#[tokio::test]
async fn creates_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let payload = NewProviderDto {
        name: "Fresh Mart".to_string(),
        provider_type: "Grocery Store".to_string(),
        contact: "555-0111".to_string(),
        city: "South Kathryn".to_string(),
    };
    let result = create_provider(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let outcome: MutationOutcomeDto = body_json(resp).await;
    assert_eq!(outcome.id, 1);
    assert_eq!(outcome.message, "Provider 'Fresh Mart' added successfully");

    Ok(())
}

/// Expect 400 Bad Request for a blank name
#[tokio::test]
async fn rejects_blank_provider_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let result = create_provider(
        State(test.into_app_state()),
        Json(NewProviderDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when updating an existing provider
#[tokio::test]
async fn updates_provider() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_provider(1)
        .build()
        .await?;

    let payload = ProviderUpdateDto {
        name: "Renamed".to_string(),
        contact: "555-0112".to_string(),
    };
    let result = update_provider(State(test.into_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when updating a provider that doesn't exist
#[tokio::test]
async fn update_returns_not_found_for_nonexistent_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let payload = ProviderUpdateDto {
        name: "Renamed".to_string(),
        contact: "555-0112".to_string(),
    };
    let result = update_provider(State(test.into_app_state()), Path(5), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK when deleting, then 404 Not Found for the same ID
#[tokio::test]
async fn deletes_provider_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_provider(1)
        .build()
        .await?;

    let first = delete_provider(State(test.into_app_state()), Path(1)).await;
    let second = delete_provider(State(test.into_app_state()), Path(1)).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 500 Internal Server Error when the tables don't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_providers(
        State(test.into_app_state()),
        Query(ProviderFilter::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
