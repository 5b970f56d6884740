//! Asset category model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Asset category record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssetCategory {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    /// Yearly depreciation, in percent
    pub depreciation_rate: Option<Decimal>,
    pub useful_life_years: Option<i32>,
    /// Icon name used by the front end
    pub icon: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAssetCategory {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    pub depreciation_rate: Option<Decimal>,
    #[validate(range(min = 0, message = "useful_life_years cannot be negative"))]
    pub useful_life_years: Option<i32>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Update category request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAssetCategory {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "code cannot be empty"))]
    pub code: Option<String>,
    pub depreciation_rate: Option<Decimal>,
    #[validate(range(min = 0, message = "useful_life_years cannot be negative"))]
    pub useful_life_years: Option<i32>,
    pub icon: Option<String>,
    pub description: Option<String>,
}
