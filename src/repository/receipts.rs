//! Receipts repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::receipt::{CreateReceipt, Receipt},
};

impl Repository {
    pub async fn receipts_list(&self) -> AppResult<Vec<Receipt>> {
        let rows = sqlx::query_as::<_, Receipt>("SELECT * FROM receipts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn receipts_get_by_id(&self, id: Uuid) -> AppResult<Receipt> {
        sqlx::query_as::<_, Receipt>("SELECT * FROM receipts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Receipt {} not found", id)))
    }

    /// Receipts belonging to any of `request_ids`
    pub async fn receipts_for_requests(&self, request_ids: &[Uuid]) -> AppResult<Vec<Receipt>> {
        let rows = sqlx::query_as::<_, Receipt>(
            "SELECT * FROM receipts WHERE request_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(request_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn receipts_create(&self, data: &CreateReceipt) -> AppResult<Receipt> {
        let row = sqlx::query_as::<_, Receipt>(
            r#"
            INSERT INTO receipts (
                id, request_id, asset_id, issued_to, issued_by, notes, handover_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), COALESCE($8, NOW()))
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.request_id)
        .bind(data.asset_id)
        .bind(&data.issued_to)
        .bind(&data.issued_by)
        .bind(&data.notes)
        .bind(data.handover_date)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn receipts_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM receipts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Receipt {} not found", id)));
        }
        Ok(())
    }
}
