//! Service request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppResult, ErrorResponse},
    models::request::{CreateRequest, Request, RequestWithReceipt, UpdateRequest},
    AppState,
};

/// List all requests (managers)
#[utoipa::path(
    get,
    path = "/Requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Request list", body = Vec<Request>))
)]
pub async fn list_requests(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> ApiResult<Vec<Request>> {
    claims.require_manager()?;
    Ok(ApiResponse::ok(state.services.requests.list().await?))
}

/// Requests created by a user, filtered by status.
///
/// The status token is case-insensitive, `all` disables the filter and
/// "cancelled" matches "Canceled".
#[utoipa::path(
    get,
    path = "/Requests/Created_by/{email}/{status}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(
        ("email" = String, Path, description = "Requester email"),
        ("status" = String, Path, description = "Status token, or `all`")
    ),
    responses((status = 200, description = "Matching requests", body = Vec<Request>))
)]
pub async fn created_by(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((email, status)): Path<(String, String)>,
) -> ApiResult<Vec<Request>> {
    claims.require_self_or_manager(&email)?;
    let requests = state.services.requests.created_by(&email, &status).await?;
    Ok(ApiResponse::ok(requests))
}

/// Requests of a user with their receipt
#[utoipa::path(
    get,
    path = "/Requests/WithReceipts/{email}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("email" = String, Path, description = "Requester email")),
    responses((status = 200, description = "Requests with receipts", body = Vec<RequestWithReceipt>))
)]
pub async fn with_receipts(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(email): Path<String>,
) -> ApiResult<Vec<RequestWithReceipt>> {
    claims.require_self_or_manager(&email)?;
    Ok(ApiResponse::ok(state.services.requests.with_receipts(&email).await?))
}

/// Get request by ID
#[utoipa::path(
    get,
    path = "/Requests/Id/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = Request),
        (status = 404, description = "Request not found", body = ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Request> {
    let request = state.services.requests.get_by_id(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(request))
}

/// Submit a request
#[utoipa::path(
    post,
    path = "/Requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = Request),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Request>>)> {
    claims.require_self_or_manager(&data.created_by)?;
    let request = state.services.requests.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("Request created", request)))
}

/// Update a request; a status in the body is normalized
#[utoipa::path(
    put,
    path = "/Requests/Id/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = Request),
        (status = 403, description = "Another user's request", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse)
    )
)]
pub async fn update_request(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateRequest>,
) -> ApiResult<Request> {
    let id = parse_id(&id)?;
    if !claims.is_manager() {
        let existing = state.services.requests.get_by_id(id).await?;
        claims.require_self_or_manager(&existing.created_by)?;
    }
    let request = state.services.requests.update(id, &data).await?;
    Ok(ApiResponse::with_message("Request updated", request))
}

/// Delete a request
#[utoipa::path(
    delete,
    path = "/Requests/Id/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted"),
        (status = 404, description = "Request not found", body = ErrorResponse)
    )
)]
pub async fn delete_request(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_manager()?;
    state.services.requests.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Request deleted"))
}
