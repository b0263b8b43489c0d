//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/tables/{table}` - Dataset overview of one table
/// - `GET|POST /api/providers`, `PUT|DELETE /api/providers/{id}`, `GET /api/providers/options`
/// - The same set for `/api/receivers`, `/api/food-listings` and `/api/claims`
/// - `GET /api/reports` - Report catalog
/// - `GET /api/reports/{key}` - Run a report by key or title
/// - `GET /api/analytics/meal-types` - Most claimed meal types series
/// - `GET /api/analytics/top-providers` - Top 10 donating providers series
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Foodshare", description = "Food surplus redistribution API"), tags(
        (name = controller::table::TABLE_TAG, description = "Dataset overview"),
        (name = controller::provider::PROVIDER_TAG, description = "Food providers"),
        (name = controller::receiver::RECEIVER_TAG, description = "Food receivers"),
        (name = controller::food_listing::FOOD_LISTING_TAG, description = "Food listings"),
        (name = controller::claim::CLAIM_TAG, description = "Claims on food listings"),
        (name = controller::report::REPORT_TAG, description = "Predefined analytical reports"),
        (name = controller::analytics::ANALYTICS_TAG, description = "Summary chart data"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::table::get_table))
        .routes(routes!(
            controller::provider::get_providers,
            controller::provider::create_provider
        ))
        .routes(routes!(controller::provider::get_provider_options))
        .routes(routes!(
            controller::provider::update_provider,
            controller::provider::delete_provider
        ))
        .routes(routes!(
            controller::receiver::get_receivers,
            controller::receiver::create_receiver
        ))
        .routes(routes!(controller::receiver::get_receiver_options))
        .routes(routes!(
            controller::receiver::update_receiver,
            controller::receiver::delete_receiver
        ))
        .routes(routes!(
            controller::food_listing::get_food_listings,
            controller::food_listing::create_food_listing
        ))
        .routes(routes!(controller::food_listing::get_food_listing_options))
        .routes(routes!(
            controller::food_listing::update_food_listing,
            controller::food_listing::delete_food_listing
        ))
        .routes(routes!(
            controller::claim::get_claims,
            controller::claim::create_claim
        ))
        .routes(routes!(controller::claim::get_claim_options))
        .routes(routes!(
            controller::claim::update_claim,
            controller::claim::delete_claim
        ))
        .routes(routes!(controller::report::list_reports))
        .routes(routes!(controller::report::run_report))
        .routes(routes!(controller::analytics::get_meal_type_claims))
        .routes(routes!(controller::analytics::get_top_providers))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
