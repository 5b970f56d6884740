//! Requests repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::request::{CreateRequest, Request, RequestWithReceipt, UpdateRequest},
};

impl Repository {
    pub async fn requests_list(&self) -> AppResult<Vec<Request>> {
        let rows = sqlx::query_as::<_, Request>("SELECT * FROM requests ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn requests_get_by_id(&self, id: Uuid) -> AppResult<Request> {
        sqlx::query_as::<_, Request>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Requests created by `email`; `status = None` matches every status
    pub async fn requests_created_by(&self, email: &str, status: Option<&str>) -> AppResult<Vec<Request>> {
        let rows = sqlx::query_as::<_, Request>(
            r#"
            SELECT * FROM requests
            WHERE LOWER(created_by) = LOWER($1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Requests of `email` with their latest receipt
    pub async fn requests_with_receipts(&self, email: &str) -> AppResult<Vec<RequestWithReceipt>> {
        let rows = sqlx::query_as::<_, RequestWithReceipt>(
            r#"
            SELECT r.*,
                   rc.id AS receipt_id,
                   rc.issued_by AS receipt_issued_by,
                   rc.handover_date AS receipt_handover_date,
                   rc.notes AS receipt_notes
            FROM requests r
            LEFT JOIN LATERAL (
                SELECT id, issued_by, handover_date, notes
                FROM receipts
                WHERE receipts.request_id = r.id
                ORDER BY created_at DESC
                LIMIT 1
            ) rc ON TRUE
            WHERE LOWER(r.created_by) = LOWER($1)
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a request; `status` is already normalized
    pub async fn requests_create(&self, data: &CreateRequest, status: &str) -> AppResult<Request> {
        let row = sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (
                id, title, request_type, description, asset_id, created_by, status, priority,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.request_type)
        .bind(&data.description)
        .bind(data.asset_id)
        .bind(&data.created_by)
        .bind(status)
        .bind(&data.priority)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Merge present fields into a request; `status` is already normalized
    pub async fn requests_update(&self, id: Uuid, data: &UpdateRequest, status: Option<&str>) -> AppResult<Request> {
        sqlx::query_as::<_, Request>(
            r#"
            UPDATE requests SET
                title = COALESCE($2, title),
                request_type = COALESCE($3, request_type),
                description = COALESCE($4, description),
                asset_id = COALESCE($5, asset_id),
                status = COALESCE($6, status),
                priority = COALESCE($7, priority),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.request_type)
        .bind(&data.description)
        .bind(data.asset_id)
        .bind(status)
        .bind(&data.priority)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    pub async fn requests_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Request {} not found", id)));
        }
        Ok(())
    }
}
