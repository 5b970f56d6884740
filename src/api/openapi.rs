//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{asset_services, assets, auth, catalog, health, logs, receipts, requests, users};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Asset Tracker API",
        version = "0.1.0",
        description = "Organizational asset management REST API. Every response is wrapped in `{ success, message?, data? }`."
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::credentials,
        auth::session,
        // Users
        users::list_users,
        users::get_user,
        users::get_user_by_email,
        users::sign_up,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::update_password,
        users::verify_password,
        // Departments and categories
        catalog::list_departments,
        catalog::get_department,
        catalog::create_department,
        catalog::update_department,
        catalog::delete_department,
        catalog::list_categories,
        catalog::get_category,
        catalog::create_category,
        catalog::update_category,
        catalog::delete_category,
        // Assets
        assets::list_assets,
        assets::overview,
        assets::assigned_to,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::assign_asset,
        assets::return_asset,
        assets::delete_asset,
        // Requests
        requests::list_requests,
        requests::created_by,
        requests::with_receipts,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::delete_request,
        // Asset services
        asset_services::list_services,
        asset_services::services_for_asset,
        asset_services::get_service,
        asset_services::create_service,
        asset_services::update_service,
        asset_services::delete_service,
        // Receipts
        receipts::list_receipts,
        receipts::multi_fetch,
        receipts::get_receipt,
        receipts::create_receipt,
        receipts::delete_receipt,
        // Log
        logs::create_entry,
        logs::user_log,
    ),
    components(
        schemas(
            // Auth
            auth::CredentialsRequest,
            auth::SessionToken,
            // Users
            crate::models::user::Role,
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::UpdatePassword,
            crate::models::user::VerifyPassword,
            crate::models::user::PasswordCheck,
            // Departments and categories
            crate::models::department::Department,
            crate::models::department::CreateDepartment,
            crate::models::department::UpdateDepartment,
            crate::models::category::AssetCategory,
            crate::models::category::CreateAssetCategory,
            crate::models::category::UpdateAssetCategory,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::AssetOverview,
            crate::models::asset::CreateAsset,
            crate::models::asset::UpdateAsset,
            crate::models::asset::AssignAsset,
            // Requests
            crate::models::request::Request,
            crate::models::request::RequestWithReceipt,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            // Asset services
            crate::models::asset_service::AssetService,
            crate::models::asset_service::CreateAssetService,
            crate::models::asset_service::UpdateAssetService,
            // Receipts
            crate::models::receipt::Receipt,
            crate::models::receipt::CreateReceipt,
            // Log
            crate::models::log::LogEntry,
            crate::models::log::CreateLogEntry,
            crate::models::log::LogPage,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Credentials login"),
        (name = "users", description = "Employee accounts"),
        (name = "departments", description = "Departments"),
        (name = "categories", description = "Asset categories"),
        (name = "assets", description = "Assets and assignments"),
        (name = "requests", description = "Service requests"),
        (name = "asset-services", description = "Asset service records"),
        (name = "receipts", description = "Handover receipts"),
        (name = "log", description = "Per-user audit log")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_bearer_scheme_and_request_routes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["components"]["securitySchemes"]["bearer_auth"].is_object());
        assert!(json["paths"]["/Requests/Created_by/{email}/{status}"].is_object());
        assert!(json["paths"]["/Log/{email}"].is_object());
    }
}
