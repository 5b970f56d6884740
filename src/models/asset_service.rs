//! Asset service record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Service request scoped to an existing asset
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssetService {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub created_by: String,
    /// e.g. "Repair", "Maintenance", "Upgrade"
    pub service_type: String,
    pub description: Option<String>,
    pub status: String,
    pub cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAssetService {
    pub asset_id: Uuid,
    #[validate(email(message = "created_by must be an email"))]
    pub created_by: String,
    #[validate(length(min = 1, message = "service_type is required"))]
    pub service_type: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub cost: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAssetService {
    #[validate(length(min = 1, message = "service_type cannot be empty"))]
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub cost: Option<Decimal>,
}
