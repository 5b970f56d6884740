//! Department model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Department record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    /// Short code, e.g. "ENG"
    pub code: String,
    /// Role titles available in the department
    pub roles: Vec<String>,
    pub budget: Option<Decimal>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create department request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDepartment {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub budget: Option<Decimal>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Update department request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartment {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "code cannot be empty"))]
    pub code: Option<String>,
    pub roles: Option<Vec<String>>,
    pub budget: Option<Decimal>,
    pub description: Option<String>,
}
