//! Asset endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiQuery, ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::asset::{Asset, AssetOverview, AssignAsset, AssignedToQuery, CreateAsset, UpdateAsset},
    AppState,
};

/// List all assets
#[utoipa::path(
    get,
    path = "/Assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Asset list", body = Vec<Asset>))
)]
pub async fn list_assets(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> ApiResult<Vec<Asset>> {
    Ok(ApiResponse::ok(state.services.assets.list().await?))
}

/// Assets with department, category and assignee resolved
#[utoipa::path(
    get,
    path = "/Assets/Overview",
    tag = "assets",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Joined asset list", body = Vec<AssetOverview>))
)]
pub async fn overview(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> ApiResult<Vec<AssetOverview>> {
    Ok(ApiResponse::ok(state.services.assets.overview().await?))
}

/// Assets assigned to a user (defaults to the caller)
#[utoipa::path(
    get,
    path = "/Assets/AssignedTo",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("email" = Option<String>, Query, description = "Assignee email, defaults to the caller")),
    responses((status = 200, description = "Assigned assets", body = Vec<Asset>))
)]
pub async fn assigned_to(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiQuery(query): ApiQuery<AssignedToQuery>,
) -> ApiResult<Vec<Asset>> {
    let email = query.email.unwrap_or_else(|| claims.sub.clone());
    claims.require_self_or_manager(&email)?;

    Ok(ApiResponse::ok(state.services.assets.assigned_to(&email).await?))
}

/// Get asset by ID
#[utoipa::path(
    get,
    path = "/Assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details", body = Asset),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
pub async fn get_asset(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Asset> {
    let asset = state.services.assets.get_by_id(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(asset))
}

/// Create asset
#[utoipa::path(
    post,
    path = "/Assets",
    tag = "assets",
    security(("bearer_auth" = [])),
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    )
)]
pub async fn create_asset(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateAsset>,
) -> AppResult<(StatusCode, Json<ApiResponse<Asset>>)> {
    claims.require_manager()?;
    let asset = state.services.assets.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("Asset created", asset)))
}

/// Update asset
#[utoipa::path(
    put,
    path = "/Assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = Asset),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
pub async fn update_asset(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateAsset>,
) -> ApiResult<Asset> {
    claims.require_manager()?;
    let asset = state.services.assets.update(parse_id(&id)?, &data).await?;
    Ok(ApiResponse::with_message("Asset updated", asset))
}

/// Assign asset to a user
#[utoipa::path(
    put,
    path = "/Assets/{id}/Assign",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    request_body = AssignAsset,
    responses(
        (status = 200, description = "Asset assigned", body = Asset),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
pub async fn assign_asset(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<AssignAsset>,
) -> ApiResult<Asset> {
    claims.require_manager()?;
    if let Some(deadline) = data.return_deadline {
        if deadline <= chrono::Utc::now() {
            return Err(AppError::Validation("return_deadline must be in the future".to_string()));
        }
    }

    let asset = state
        .services
        .assets
        .assign(parse_id(&id)?, &data.email, data.return_deadline)
        .await?;
    Ok(ApiResponse::with_message("Asset assigned", asset))
}

/// Mark asset as returned
#[utoipa::path(
    put,
    path = "/Assets/{id}/Return",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset returned", body = Asset),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
pub async fn return_asset(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Asset> {
    claims.require_manager()?;
    let asset = state.services.assets.return_asset(parse_id(&id)?).await?;
    Ok(ApiResponse::with_message("Asset returned", asset))
}

/// Delete asset
#[utoipa::path(
    delete,
    path = "/Assets/{id}",
    tag = "assets",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset deleted"),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_manager()?;
    state.services.assets.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Asset deleted"))
}
