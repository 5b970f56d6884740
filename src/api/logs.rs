//! Audit log endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{ApiQuery, ApiResponse, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppResult, ErrorResponse},
    models::log::{CreateLogEntry, LogEntry, LogPage, LogQuery},
    AppState,
};

/// Append an audit entry
#[utoipa::path(
    post,
    path = "/Log",
    tag = "log",
    security(("bearer_auth" = [])),
    request_body = CreateLogEntry,
    responses(
        (status = 201, description = "Entry recorded", body = LogEntry),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateLogEntry>,
) -> AppResult<(StatusCode, Json<ApiResponse<LogEntry>>)> {
    claims.require_self_or_admin(&data.user_email)?;
    let entry = state.services.logs.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(entry)))
}

/// A user's audit log, newest first. Reading trims the log to the retention cap.
#[utoipa::path(
    get,
    path = "/Log/{email}",
    tag = "log",
    security(("bearer_auth" = [])),
    params(
        ("email" = String, Path, description = "User email"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Entries per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Log page", body = LogPage),
        (status = 403, description = "Another user's log", body = ErrorResponse)
    )
)]
pub async fn user_log(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(email): Path<String>,
    ApiQuery(query): ApiQuery<LogQuery>,
) -> AppResult<Json<LogPage>> {
    claims.require_self_or_admin(&email)?;
    let page = state.services.logs.page(&email, &query).await?;
    Ok(Json(page))
}
