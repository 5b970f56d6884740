//! Asset service records repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        asset::STATUS_UNDER_MAINTENANCE,
        asset_service::{AssetService, CreateAssetService, UpdateAssetService},
        request::STATUS_PENDING,
    },
};

impl Repository {
    pub async fn asset_services_list(&self) -> AppResult<Vec<AssetService>> {
        let rows = sqlx::query_as::<_, AssetService>("SELECT * FROM asset_services ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn asset_services_get_by_id(&self, id: Uuid) -> AppResult<AssetService> {
        sqlx::query_as::<_, AssetService>("SELECT * FROM asset_services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset service {} not found", id)))
    }

    pub async fn asset_services_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetService>> {
        let rows = sqlx::query_as::<_, AssetService>(
            "SELECT * FROM asset_services WHERE asset_id = $1 ORDER BY created_at DESC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a service record and flag its asset as under maintenance.
    /// Both writes commit together; an unknown asset writes nothing.
    pub async fn asset_services_create(&self, data: &CreateAssetService, status: Option<&str>) -> AppResult<AssetService> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE assets SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(data.asset_id)
            .bind(STATUS_UNDER_MAINTENANCE)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset {} not found", data.asset_id)));
        }

        let row = sqlx::query_as::<_, AssetService>(
            r#"
            INSERT INTO asset_services (
                id, asset_id, created_by, service_type, description, status, cost, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.asset_id)
        .bind(&data.created_by)
        .bind(&data.service_type)
        .bind(&data.description)
        .bind(status.unwrap_or(STATUS_PENDING))
        .bind(data.cost)
        .bind(data.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    pub async fn asset_services_update(
        &self,
        id: Uuid,
        data: &UpdateAssetService,
        status: Option<&str>,
    ) -> AppResult<AssetService> {
        sqlx::query_as::<_, AssetService>(
            r#"
            UPDATE asset_services SET
                service_type = COALESCE($2, service_type),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                cost = COALESCE($5, cost),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.service_type)
        .bind(&data.description)
        .bind(status)
        .bind(data.cost)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset service {} not found", id)))
    }

    pub async fn asset_services_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM asset_services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset service {} not found", id)));
        }
        Ok(())
    }
}
