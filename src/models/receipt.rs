//! Handover receipt model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Handover record for a completed request
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Receipt {
    pub id: Uuid,
    pub request_id: Uuid,
    pub asset_id: Option<Uuid>,
    pub issued_to: String,
    pub issued_by: Option<String>,
    pub notes: Option<String>,
    pub handover_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReceipt {
    pub request_id: Uuid,
    pub asset_id: Option<Uuid>,
    #[validate(length(min = 1, message = "issued_to is required"))]
    pub issued_to: String,
    pub issued_by: Option<String>,
    pub notes: Option<String>,
    pub handover_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// `?request_ids=a,b,c`
#[derive(Debug, Deserialize)]
pub struct MultiFetchQuery {
    #[serde(default)]
    pub request_ids: String,
}
