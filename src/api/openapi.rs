//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, cart, gear, health, rentals};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LensLocker API",
        version = "0.1.0",
        description = "Camera Gear Rental Marketplace REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Gear
        gear::list_gear,
        gear::get_gear,
        gear::create_gear,
        // Rentals
        rentals::create_rentals,
        rentals::list_rentals,
        // Cart
        cart::quote_cart,
    ),
    components(
        schemas(
            // Auth
            auth::RegisterResponse,
            auth::LoginResponse,
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::LoginRequest,
            // Gear
            crate::models::gear::Gear,
            crate::models::gear::GearCategory,
            crate::models::gear::GearSpecifications,
            crate::models::gear::GearLocation,
            crate::models::gear::CreateGear,
            gear::GearListResponse,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::RentalStatus,
            crate::models::rental::CreateRental,
            crate::models::rental::CheckoutRequest,
            rentals::CheckoutResponse,
            rentals::RentalListResponse,
            // Cart
            cart::QuoteRequest,
            cart::QuoteLine,
            cart::QuoteResponse,
            cart::QuotedLine,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "gear", description = "Gear catalog"),
        (name = "rentals", description = "Rental orders"),
        (name = "cart", description = "Cart pricing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
