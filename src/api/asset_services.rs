//! Asset service record endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppResult, ErrorResponse},
    models::asset_service::{AssetService, CreateAssetService, UpdateAssetService},
    AppState,
};

#[utoipa::path(
    get,
    path = "/AssetServices",
    tag = "asset-services",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Service records", body = Vec<AssetService>))
)]
pub async fn list_services(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> ApiResult<Vec<AssetService>> {
    Ok(ApiResponse::ok(state.services.asset_services.list().await?))
}

#[utoipa::path(
    get,
    path = "/AssetServices/Asset/{asset_id}",
    tag = "asset-services",
    security(("bearer_auth" = [])),
    params(("asset_id" = String, Path, description = "Asset ID")),
    responses((status = 200, description = "Service history of the asset", body = Vec<AssetService>))
)]
pub async fn services_for_asset(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(asset_id): Path<String>,
) -> ApiResult<Vec<AssetService>> {
    let records = state.services.asset_services.for_asset(parse_id(&asset_id)?).await?;
    Ok(ApiResponse::ok(records))
}

#[utoipa::path(
    get,
    path = "/AssetServices/{id}",
    tag = "asset-services",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Service record ID")),
    responses(
        (status = 200, description = "Service record", body = AssetService),
        (status = 404, description = "Service record not found", body = ErrorResponse)
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<AssetService> {
    let record = state.services.asset_services.get_by_id(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(record))
}

/// Open a service record; the asset is put under maintenance
#[utoipa::path(
    post,
    path = "/AssetServices",
    tag = "asset-services",
    security(("bearer_auth" = [])),
    request_body = CreateAssetService,
    responses(
        (status = 201, description = "Service record created", body = AssetService),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateAssetService>,
) -> AppResult<(StatusCode, Json<ApiResponse<AssetService>>)> {
    claims.require_self_or_manager(&data.created_by)?;
    let record = state.services.asset_services.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("Service request created", record)))
}

#[utoipa::path(
    put,
    path = "/AssetServices/{id}",
    tag = "asset-services",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Service record ID")),
    request_body = UpdateAssetService,
    responses(
        (status = 200, description = "Service record updated", body = AssetService),
        (status = 404, description = "Service record not found", body = ErrorResponse)
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateAssetService>,
) -> ApiResult<AssetService> {
    claims.require_manager()?;
    let record = state.services.asset_services.update(parse_id(&id)?, &data).await?;
    Ok(ApiResponse::with_message("Service request updated", record))
}

#[utoipa::path(
    delete,
    path = "/AssetServices/{id}",
    tag = "asset-services",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Service record ID")),
    responses(
        (status = 200, description = "Service record deleted"),
        (status = 404, description = "Service record not found", body = ErrorResponse)
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_manager()?;
    state.services.asset_services.delete(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Service request deleted"))
}
