//! Asset model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const STATUS_AVAILABLE: &str = "Available";
pub const STATUS_ASSIGNED: &str = "Assigned";
pub const STATUS_UNDER_MAINTENANCE: &str = "Under Maintenance";

pub const DEFAULT_CONDITION: &str = "Good";

/// Asset record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub serial_number: String,
    pub category_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    /// Free text, e.g. "New", "Good", "Damaged"
    pub condition: String,
    /// "Available", "Assigned", "Under Maintenance", ...
    pub status: String,
    /// Email of the assignee
    pub assigned_to: Option<String>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub return_deadline: Option<DateTime<Utc>>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Asset joined with its department, category and assignee
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AssetOverview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub asset: Asset,
    pub department_name: Option<String>,
    pub category_name: Option<String>,
    pub category_icon: Option<String>,
    pub assignee_name: Option<String>,
}

/// Create asset request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "serial_number is required"))]
    pub serial_number: String,
    pub category_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub condition: Option<String>,
    pub status: Option<String>,
    #[validate(email(message = "assigned_to must be an email"))]
    pub assigned_to: Option<String>,
    pub return_deadline: Option<DateTime<Utc>>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Update asset request; present fields overwrite stored ones
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAsset {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "serial_number cannot be empty"))]
    pub serial_number: Option<String>,
    pub category_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub condition: Option<String>,
    pub status: Option<String>,
    #[validate(email(message = "assigned_to must be an email"))]
    pub assigned_to: Option<String>,
    pub return_deadline: Option<DateTime<Utc>>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub notes: Option<String>,
}

/// Assign an asset to a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignAsset {
    #[validate(email(message = "email is required"))]
    pub email: String,
    pub return_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct AssignedToQuery {
    pub email: Option<String>,
}
