//! Department and asset category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{parse_id, ApiResponse, ApiResult, AuthenticatedUser, ValidatedJson};
use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        category::{AssetCategory, CreateAssetCategory, UpdateAssetCategory},
        department::{CreateDepartment, Department, UpdateDepartment},
    },
    AppState,
};

/// List departments
#[utoipa::path(
    get,
    path = "/Departments",
    tag = "departments",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Department list", body = Vec<Department>))
)]
pub async fn list_departments(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> ApiResult<Vec<Department>> {
    Ok(ApiResponse::ok(state.services.catalog.list_departments().await?))
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/Departments/{id}",
    tag = "departments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department details", body = Department),
        (status = 404, description = "Department not found", body = ErrorResponse)
    )
)]
pub async fn get_department(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Department> {
    let department = state.services.catalog.get_department(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(department))
}

/// Create department (admin only)
#[utoipa::path(
    post,
    path = "/Departments",
    tag = "departments",
    security(("bearer_auth" = [])),
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    )
)]
pub async fn create_department(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateDepartment>,
) -> AppResult<(StatusCode, Json<ApiResponse<Department>>)> {
    claims.require_admin()?;
    let department = state.services.catalog.create_department(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("Department created", department)))
}

/// Update department (admin only)
#[utoipa::path(
    put,
    path = "/Departments/{id}",
    tag = "departments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Department ID")),
    request_body = UpdateDepartment,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 404, description = "Department not found", body = ErrorResponse)
    )
)]
pub async fn update_department(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateDepartment>,
) -> ApiResult<Department> {
    claims.require_admin()?;
    let department = state.services.catalog.update_department(parse_id(&id)?, &data).await?;
    Ok(ApiResponse::with_message("Department updated", department))
}

/// Delete department (admin only)
#[utoipa::path(
    delete,
    path = "/Departments/{id}",
    tag = "departments",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department deleted"),
        (status = 404, description = "Department not found", body = ErrorResponse)
    )
)]
pub async fn delete_department(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_admin()?;
    state.services.catalog.delete_department(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Department deleted"))
}

/// List asset categories
#[utoipa::path(
    get,
    path = "/AssetCategories",
    tag = "categories",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Category list", body = Vec<AssetCategory>))
)]
pub async fn list_categories(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> ApiResult<Vec<AssetCategory>> {
    Ok(ApiResponse::ok(state.services.catalog.list_categories().await?))
}

/// Get asset category by ID
#[utoipa::path(
    get,
    path = "/AssetCategories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = AssetCategory),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<AssetCategory> {
    let category = state.services.catalog.get_category(parse_id(&id)?).await?;
    Ok(ApiResponse::ok(category))
}

/// Create asset category (admin only)
#[utoipa::path(
    post,
    path = "/AssetCategories",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = CreateAssetCategory,
    responses(
        (status = 201, description = "Category created", body = AssetCategory),
        (status = 400, description = "Missing required field", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateAssetCategory>,
) -> AppResult<(StatusCode, Json<ApiResponse<AssetCategory>>)> {
    claims.require_admin()?;
    let category = state.services.catalog.create_category(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::with_message("Asset category created", category)))
}

/// Update asset category (admin only)
#[utoipa::path(
    put,
    path = "/AssetCategories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Category ID")),
    request_body = UpdateAssetCategory,
    responses(
        (status = 200, description = "Category updated", body = AssetCategory),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateAssetCategory>,
) -> ApiResult<AssetCategory> {
    claims.require_admin()?;
    let category = state.services.catalog.update_category(parse_id(&id)?, &data).await?;
    Ok(ApiResponse::with_message("Asset category updated", category))
}

/// Delete asset category (admin only)
#[utoipa::path(
    delete,
    path = "/AssetCategories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<()> {
    claims.require_admin()?;
    state.services.catalog.delete_category(parse_id(&id)?).await?;
    Ok(ApiResponse::message("Asset category deleted"))
}
