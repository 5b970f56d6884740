//! Asset categories repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::category::{AssetCategory, CreateAssetCategory, UpdateAssetCategory},
};

impl Repository {
    pub async fn categories_list(&self) -> AppResult<Vec<AssetCategory>> {
        let rows = sqlx::query_as::<_, AssetCategory>("SELECT * FROM asset_categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn categories_get_by_id(&self, id: Uuid) -> AppResult<AssetCategory> {
        sqlx::query_as::<_, AssetCategory>("SELECT * FROM asset_categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset category {} not found", id)))
    }

    pub async fn categories_create(&self, data: &CreateAssetCategory) -> AppResult<AssetCategory> {
        let row = sqlx::query_as::<_, AssetCategory>(
            r#"
            INSERT INTO asset_categories (
                id, name, code, depreciation_rate, useful_life_years, icon, description, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.code)
        .bind(data.depreciation_rate)
        .bind(data.useful_life_years)
        .bind(&data.icon)
        .bind(&data.description)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn categories_update(&self, id: Uuid, data: &UpdateAssetCategory) -> AppResult<AssetCategory> {
        sqlx::query_as::<_, AssetCategory>(
            r#"
            UPDATE asset_categories SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                depreciation_rate = COALESCE($4, depreciation_rate),
                useful_life_years = COALESCE($5, useful_life_years),
                icon = COALESCE($6, icon),
                description = COALESCE($7, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.code)
        .bind(data.depreciation_rate)
        .bind(data.useful_life_years)
        .bind(&data.icon)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset category {} not found", id)))
    }

    pub async fn categories_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM asset_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset category {} not found", id)));
        }
        Ok(())
    }
}
