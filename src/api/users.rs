//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppResult, ErrorResponse},
    models::user::{CreateUser, PasswordCheck, UpdatePassword, UpdateUser, User, VerifyPassword},
    AppState,
};

/// List users
#[utoipa::path(
    get,
    path = "/Users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> ApiResult<Vec<User>> {
    let users = state.services.users.list().await?;
    Ok(ApiResponse::ok(users))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/Users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<User> {
    let user = state.services.users.get_by_id(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(user))
}

/// Get user by email
#[utoipa::path(
    get,
    path = "/Users/Email/{email}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(email): Path<String>,
) -> ApiResult<User> {
    let user = state.services.users.get_by_email(&email).await?;
    Ok(ApiResponse::ok(user))
}

/// Public registration
#[utoipa::path(
    post,
    path = "/Users/SignUp",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let created = state.services.users.sign_up(user).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("User registered", created)))
}

/// Create a user with any role (admin only)
#[utoipa::path(
    post,
    path = "/Users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 403, description = "Admin privileges required", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(user): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    claims.require_admin()?;

    let created = state.services.users.create_user(user).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("User created", created)))
}

/// Update a user (self, or admin for anyone; role changes are admin only)
#[utoipa::path(
    put,
    path = "/Users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(user): ValidatedJson<UpdateUser>,
) -> ApiResult<User> {
    let id = parse_id(&id)?;
    let updated = state.services.users.update_user(id, user, &claims).await?;
    Ok(ApiResponse::with_message("User updated", updated))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/Users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_admin()?;

    state.services.users.delete_user(parse_id(&id)?).await?;
    Ok(ApiResponse::message("User deleted"))
}

/// Replace a user's password
#[utoipa::path(
    put,
    path = "/Users/UpdatedPassword/{email}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "User email")),
    request_body = UpdatePassword,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Password too short", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_password(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(email): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdatePassword>,
) -> ApiResult<()> {
    claims.require_self_or_admin(&email)?;

    state.services.users.update_password(&email, &body.password).await?;
    Ok(ApiResponse::message("Password updated"))
}

/// Check a password against the stored one
#[utoipa::path(
    post,
    path = "/Users/VerifyPassword/{email}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "User email")),
    request_body = VerifyPassword,
    responses(
        (status = 200, description = "Verification result", body = PasswordCheck),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn verify_password(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(email): Path<String>,
    ValidatedJson(body): ValidatedJson<VerifyPassword>,
) -> ApiResult<PasswordCheck> {
    claims.require_self_or_admin(&email)?;

    let valid = state.services.users.verify_password(&email, &body.password).await?;
    Ok(ApiResponse::ok(PasswordCheck { valid }))
}
