//! Credentials login and session endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{error::ErrorResponse, models::user::User, AppState};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CredentialsRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionToken {
    pub token: String,
    pub token_type: String,
    /// Seconds until expiry
    pub expires_in: i64,
    pub user: User,
}

/// Exchange email and password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/credentials",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Session issued", body = SessionToken),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse)
    )
)]
pub async fn credentials(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CredentialsRequest>,
) -> ApiResult<SessionToken> {
    let (token, user) = state
        .services
        .users
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(ApiResponse::ok(SessionToken {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.services.users.token_lifetime(),
        user,
    }))
}

/// Current user
#[utoipa::path(
    get,
    path = "/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = User),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn session(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> ApiResult<User> {
    let user = state.services.users.get_by_id(claims.user_id).await?;
    Ok(ApiResponse::ok(user))
}
