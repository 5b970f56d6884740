//! Handover receipt endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiQuery, ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppResult, ErrorResponse},
    models::receipt::{CreateReceipt, MultiFetchQuery, Receipt},
    services::receipts::parse_request_ids,
    AppState,
};

#[utoipa::path(
    get,
    path = "/Receipts",
    tag = "receipts",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Receipt list", body = Vec<Receipt>))
)]
pub async fn list_receipts(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> ApiResult<Vec<Receipt>> {
    claims.require_manager()?;
    Ok(ApiResponse::ok(state.services.receipts.list().await?))
}

/// Receipts for several requests at once
#[utoipa::path(
    get,
    path = "/Receipts/MultiFetch",
    tag = "receipts",
    security(("bearer_auth" = [])),
    params(("request_ids" = String, Query, description = "Comma separated request IDs")),
    responses(
        (status = 200, description = "Matching receipts", body = Vec<Receipt>),
        (status = 400, description = "Malformed request ID", body = ErrorResponse)
    )
)]
pub async fn multi_fetch(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ApiQuery(query): ApiQuery<MultiFetchQuery>,
) -> ApiResult<Vec<Receipt>> {
    let ids = parse_request_ids(&query.request_ids)?;
    Ok(ApiResponse::ok(state.services.receipts.for_requests(&ids).await?))
}

#[utoipa::path(
    get,
    path = "/Receipts/{id}",
    tag = "receipts",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Receipt ID")),
    responses(
        (status = 200, description = "Receipt", body = Receipt),
        (status = 404, description = "Receipt not found", body = ErrorResponse)
    )
)]
pub async fn get_receipt(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Receipt> {
    let receipt = state.services.receipts.get_by_id(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(receipt))
}

/// Issue a handover receipt
#[utoipa::path(
    post,
    path = "/Receipts",
    tag = "receipts",
    security(("bearer_auth" = [])),
    request_body = CreateReceipt,
    responses(
        (status = 201, description = "Receipt created", body = Receipt),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    )
)]
pub async fn create_receipt(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateReceipt>,
) -> AppResult<(StatusCode, Json<ApiResponse<Receipt>>)> {
    claims.require_manager()?;
    let receipt = state.services.receipts.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("Receipt created", receipt)))
}

#[utoipa::path(
    delete,
    path = "/Receipts/{id}",
    tag = "receipts",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Receipt ID")),
    responses(
        (status = 200, description = "Receipt deleted"),
        (status = 404, description = "Receipt not found", body = ErrorResponse)
    )
)]
pub async fn delete_receipt(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_manager()?;
    state.services.receipts.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Receipt deleted"))
}
