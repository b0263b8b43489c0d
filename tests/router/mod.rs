//! End-to-end tests through the assembled router.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use foodshare::server::router::routes;
use foodshare_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::{util::body_json, TestContextExt};

/// Expect a POSTed provider to be listed by the following GET
#[tokio::test]
async fn creates_and_lists_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let create = Request::builder()
        .method(Method::POST)
        .uri("/api/providers")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "name": "Gonzales-Cochran",
                "provider_type": "Supermarket",
                "contact": "555-0100",
                "city": "New Jessica"
            })
            .to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(create).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let list = Request::builder()
        .uri("/api/providers?name=cochran")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(list).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let providers: serde_json::Value = body_json(resp).await;
    assert_eq!(providers[0]["name"], json!("Gonzales-Cochran"));

    Ok(())
}

/// Expect the static options path to win over the ID path
#[tokio::test]
async fn routes_options_before_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .uri("/api/food-listings/options")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let options: serde_json::Value = body_json(resp).await;
    assert_eq!(options["meal_type"], json!(["All", "Breakfast"]));

    Ok(())
}

/// Expect the dataset overview to accept snake case table names
#[tokio::test]
async fn serves_table_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_receiver(1)
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .uri("/api/tables/receivers")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let snapshot: serde_json::Value = body_json(resp).await;
    assert_eq!(snapshot["rows"][0][1], json!("Receiver 1"));

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/api/reports/{key}"].is_object());

    Ok(())
}
