//! Gear (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::gear::{CreateGear, Gear, GearQuery},
};

use super::AuthenticatedUser;

/// Paginated gear list response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GearListResponse {
    pub success: bool,
    /// Page of gear documents, newest first
    pub data: Vec<Gear>,
    /// Total number of matching documents
    pub total: i64,
    /// Whether more pages exist beyond this one
    pub has_more: bool,
}

/// List gear with search and pagination
#[utoipa::path(
    get,
    path = "/gear",
    tag = "gear",
    params(
        ("page" = Option<String>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<String>, Query, description = "Items per page (default: 12)"),
        ("category" = Option<String>, Query, description = "Filter by category (\"all\" disables the filter)"),
        ("search" = Option<String>, Query, description = "Case-insensitive search in name, brand, model, description")
    ),
    responses(
        (status = 200, description = "Page of gear", body = GearListResponse)
    )
)]
pub async fn list_gear(
    State(state): State<crate::AppState>,
    Query(query): Query<GearQuery>,
) -> AppResult<Json<GearListResponse>> {
    let (data, total, has_more) = state.services.catalog.search_gear(&query).await?;

    Ok(Json(GearListResponse {
        success: true,
        data,
        total,
        has_more,
    }))
}

/// Get gear details by ID
#[utoipa::path(
    get,
    path = "/gear/{id}",
    tag = "gear",
    params(
        ("id" = Uuid, Path, description = "Gear ID")
    ),
    responses(
        (status = 200, description = "Gear details", body = Gear),
        (status = 404, description = "Gear not found")
    )
)]
pub async fn get_gear(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Gear>> {
    let gear = state.services.catalog.get_gear(id).await?;
    Ok(Json(gear))
}

/// Create a new gear listing
#[utoipa::path(
    post,
    path = "/gear",
    tag = "gear",
    security(("bearer_auth" = [])),
    request_body = CreateGear,
    responses(
        (status = 201, description = "Gear created", body = Gear),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_gear(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(gear): Json<CreateGear>,
) -> AppResult<(StatusCode, Json<Gear>)> {
    let created = state
        .services
        .catalog
        .create_gear(gear, claims.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
