//! API handlers for the asset tracker REST endpoints

pub mod asset_services;
pub mod assets;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod logs;
pub mod openapi;
pub mod receipts;
pub mod requests;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::UserClaims,
    AppState,
};

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// JSON body that is deserialized and then validated.
/// Malformed bodies and missing required fields are 400s.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(ValidatedJson(value))
    }
}

/// Query string that rejects with the error envelope instead of plain text
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: None,
        })
    }
}

/// Handler result carrying the envelope
pub type ApiResult<T> = AppResult<Json<ApiResponse<T>>>;

/// Parse an opaque path ID
pub fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation(format!("Invalid id: {}", raw)))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth/credentials", post(auth::credentials))
        .route("/auth/session", get(auth::session))
        // Users
        .route("/Users", get(users::list_users).post(users::create_user))
        .route("/Users/SignUp", post(users::sign_up))
        .route("/Users/Email/:email", get(users::get_user_by_email))
        .route("/Users/UpdatedPassword/:email", put(users::update_password))
        .route("/Users/VerifyPassword/:email", post(users::verify_password))
        .route(
            "/Users/:id",
            get(users::get_user).put(users::update_user).delete(users::delete_user),
        )
        // Departments
        .route("/Departments", get(catalog::list_departments).post(catalog::create_department))
        .route(
            "/Departments/:id",
            get(catalog::get_department)
                .put(catalog::update_department)
                .delete(catalog::delete_department),
        )
        // Asset categories
        .route("/AssetCategories", get(catalog::list_categories).post(catalog::create_category))
        .route(
            "/AssetCategories/:id",
            get(catalog::get_category)
                .put(catalog::update_category)
                .delete(catalog::delete_category),
        )
        // Assets
        .route("/Assets", get(assets::list_assets).post(assets::create_asset))
        .route("/Assets/AssignedTo", get(assets::assigned_to))
        .route("/Assets/Overview", get(assets::overview))
        .route(
            "/Assets/:id",
            get(assets::get_asset).put(assets::update_asset).delete(assets::delete_asset),
        )
        .route("/Assets/:id/Assign", put(assets::assign_asset))
        .route("/Assets/:id/Return", put(assets::return_asset))
        // Requests
        .route("/Requests", get(requests::list_requests).post(requests::create_request))
        .route("/Requests/Created_by/:email/:status", get(requests::created_by))
        .route("/Requests/WithReceipts/:email", get(requests::with_receipts))
        .route(
            "/Requests/Id/:id",
            get(requests::get_request)
                .put(requests::update_request)
                .delete(requests::delete_request),
        )
        // Asset services
        .route(
            "/AssetServices",
            get(asset_services::list_services).post(asset_services::create_service),
        )
        .route("/AssetServices/Asset/:asset_id", get(asset_services::services_for_asset))
        .route(
            "/AssetServices/:id",
            get(asset_services::get_service)
                .put(asset_services::update_service)
                .delete(asset_services::delete_service),
        )
        // Receipts
        .route("/Receipts", get(receipts::list_receipts).post(receipts::create_receipt))
        .route("/Receipts/MultiFetch", get(receipts::multi_fetch))
        .route(
            "/Receipts/:id",
            get(receipts::get_receipt).delete(receipts::delete_receipt),
        )
        // Audit log
        .route("/Log", post(logs::create_entry))
        .route("/Log/:email", get(logs::user_log))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request as HttpRequest, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::AppConfig,
        models::user::Role,
        repository::Repository,
        services::Services,
    };

    /// Router over a pool that never connects; only paths rejected
    /// before the database is touched can be exercised.
    fn test_app() -> (Router, AppConfig) {
        let config = AppConfig::default();
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("lazy pool");
        let services = Services::new(Repository::new(pool), config.auth.clone(), config.logs.clone());
        let state = AppState {
            config: Arc::new(config.clone()),
            services: Arc::new(services),
        };
        (create_router(state), config)
    }

    fn bearer(config: &AppConfig, role: Role) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = UserClaims {
            sub: "jane@example.com".to_string(),
            user_id: Uuid::new_v4(),
            role,
            exp: now + 3600,
            iat: now,
        };
        format!("Bearer {}", claims.create_token(&config.auth.jwt_secret).unwrap())
    }

    async fn send(app: Router, req: HttpRequest<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Value) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let (app, _) = test_app();
        let req = HttpRequest::get("/api/v1/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let (app, _) = test_app();
        let req = json_request(Method::POST, "/api/v1/Assets", None, json!({"name": "Laptop"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn missing_required_field_is_bad_request() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Admin);
        let req = json_request(Method::POST, "/api/v1/Assets", Some(&auth), json!({"name": "Laptop"}));
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("serial_number"));
    }

    #[tokio::test]
    async fn empty_required_field_is_bad_request() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Admin);
        let req = json_request(
            Method::POST,
            "/api/v1/Departments",
            Some(&auth),
            json!({"name": "", "code": "ENG"}),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = HttpRequest::builder()
            .method(Method::POST)
            .uri("/api/v1/Requests")
            .header("content-type", "application/json")
            .header("authorization", auth)
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn short_sign_up_password_is_bad_request() {
        let (app, _) = test_app();
        let req = json_request(
            Method::POST,
            "/api/v1/Users/SignUp",
            None,
            json!({"name": "Jane", "email": "jane@example.com", "password": "123"}),
        );
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn malformed_path_id_is_bad_request() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = HttpRequest::get("/api/v1/Assets/not-a-uuid")
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn multi_fetch_rejects_malformed_ids() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = HttpRequest::get("/api/v1/Receipts/MultiFetch?request_ids=abc,def")
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn multi_fetch_with_no_ids_is_empty() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = HttpRequest::get("/api/v1/Receipts/MultiFetch?request_ids=")
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn all_is_not_a_writable_status() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = json_request(
            Method::POST,
            "/api/v1/Requests",
            Some(&auth),
            json!({"title": "New monitor", "created_by": "jane@example.com", "status": "all"}),
        );
        let (status, _) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn employees_cannot_create_departments() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = json_request(
            Method::POST,
            "/api/v1/Departments",
            Some(&auth),
            json!({"name": "Engineering", "code": "ENG"}),
        );
        let (status, _) = send(app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn other_users_log_is_forbidden() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = HttpRequest::get("/api/v1/Log/bob@example.com?page=1&limit=10")
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn malformed_query_string_uses_envelope() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Admin);
        let req = HttpRequest::get("/api/v1/Log/jane@example.com?page=abc")
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("query string"));
    }

    #[tokio::test]
    async fn repeated_multi_fetch_param_uses_envelope() {
        let (app, config) = test_app();
        let auth = bearer(&config, Role::Employee);
        let req = HttpRequest::get("/api/v1/Receipts/MultiFetch?request_ids=a&request_ids=b")
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[test]
    fn envelope_omits_empty_fields() {
        let Json(body) = ApiResponse::message("Asset deleted");
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value, json!({"success": true, "message": "Asset deleted"}));

        let Json(body) = ApiResponse::ok(vec![1, 2]);
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn parse_id_accepts_uuids_only() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_id("42"), Err(AppError::Validation(_))));
    }
}
