//! Tests for the food listing endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Days, Utc};
use foodshare::{
    model::food_listing::{
        FoodListingDto, FoodListingFilter, FoodListingFilterOptionsDto, FoodListingUpdateDto,
        NewFoodListingDto,
    },
    server::controller::food_listing::{
        create_food_listing, delete_food_listing, get_food_listing_options, get_food_listings,
        update_food_listing,
    },
};

use super::*;

fn new_listing() -> NewFoodListingDto {
    NewFoodListingDto {
        food_name: "Soup".to_string(),
        quantity: 8,
        expiry_date: Utc::now().date_naive() + Days::new(2),
        provider_id: 1,
        provider_type: "Catering Service".to_string(),
        location: "East Sheena".to_string(),
        food_type: "Vegan".to_string(),
        meal_type: "Dinner".to_string(),
    }
}

/// Expect 200 OK with listings matching every active criterion
#[tokio::test]
async fn lists_filtered_food_listings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .with_food_listing(entity::food_listing::Model {
            food_type: "Vegan".to_string(),
            ..factory::mock_food_listing(2, 1)
        })
        .build()
        .await?;

    let filter = FoodListingFilter {
        location: Some("All".to_string()),
        food_type: Some("Vegan".to_string()),
        ..Default::default()
    };
    let result = get_food_listings(State(test.into_app_state()), Query(filter)).await;

    assert!(result.is_ok());
    let listings: Vec<FoodListingDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].food_id, 2);

    Ok(())
}

/// Expect 200 OK with options for each listing criterion
#[tokio::test]
async fn lists_food_listing_options() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .build()
        .await?;

    let result = get_food_listing_options(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let options: FoodListingFilterOptionsDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(options.provider_type, vec!["All", "Restaurant"]);
    assert_eq!(options.food_type, vec!["All", "Vegetarian"]);

    Ok(())
}

/// Expect 201 Created for a valid listing
#[tokio::test]
async fn creates_food_listing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let result = create_food_listing(State(test.into_app_state()), Json(new_listing())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request for a quantity of zero
#[tokio::test]
async fn rejects_zero_quantity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_food_tables().build().await?;

    let payload = NewFoodListingDto {
        quantity: 0,
        ..new_listing()
    };
    let result = create_food_listing(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when moving the expiry date into the past
#[tokio::test]
async fn rejects_past_expiry_date_on_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .build()
        .await?;

    let payload = FoodListingUpdateDto {
        quantity: 4,
        expiry_date: Utc::now().date_naive() - Days::new(3),
    };
    let result = update_food_listing(State(test.into_app_state()), Path(1), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK when deleting an existing listing
#[tokio::test]
async fn deletes_food_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_food_tables()
        .with_mock_food_listing(1, 1)
        .build()
        .await?;

    let result = delete_food_listing(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
