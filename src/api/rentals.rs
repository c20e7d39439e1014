//! Rental order endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::rental::{CheckoutRequest, Rental, RentalQuery},
};

/// Checkout response with the created orders
#[derive(Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<Rental>,
}

/// Rental list response
#[derive(Serialize, ToSchema)]
pub struct RentalListResponse {
    pub success: bool,
    pub data: Vec<Rental>,
}

/// Create rental orders from a cart checkout
#[utoipa::path(
    post,
    path = "/rental",
    tag = "rentals",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Rental orders created", body = CheckoutResponse),
        (status = 400, description = "Empty checkout or missing required field")
    )
)]
pub async fn create_rentals(
    State(state): State<crate::AppState>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    let lines = request.rentals.unwrap_or_default();
    let created = state.services.rentals.checkout(lines).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            success: true,
            message: "Rental order(s) created successfully".to_string(),
            data: created,
        }),
    ))
}

/// List rental orders
#[utoipa::path(
    get,
    path = "/rental",
    tag = "rentals",
    params(
        ("email" = Option<String>, Query, description = "Filter by renter email"),
        ("status" = Option<String>, Query, description = "Filter by order status")
    ),
    responses(
        (status = 200, description = "Rental orders, newest first", body = RentalListResponse)
    )
)]
pub async fn list_rentals(
    State(state): State<crate::AppState>,
    Query(query): Query<RentalQuery>,
) -> AppResult<Json<RentalListResponse>> {
    let data = state.services.rentals.list(&query).await?;

    Ok(Json(RentalListResponse {
        success: true,
        data,
    }))
}
