//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{CreateUser, LoginRequest, User},
};

use super::AuthenticatedUser;

/// Registration response
#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// Login response with bearer token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub user: User,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = CreateUser,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(user): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let created = state.services.users.register(user).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful".to_string(),
            user: created,
        }),
    ))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, user) = state
        .services
        .users
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user,
    }))
}

/// Get the authenticated user's account
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_by_id(claims.user_id).await?;
    Ok(Json(user))
}
