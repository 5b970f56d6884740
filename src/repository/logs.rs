//! Audit log repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::AppResult,
    models::log::{CreateLogEntry, LogEntry},
};

impl Repository {
    pub async fn logs_create(&self, data: &CreateLogEntry) -> AppResult<LogEntry> {
        let row = sqlx::query_as::<_, LogEntry>(
            r#"
            INSERT INTO logs (id, user_email, action, details, created_at)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.user_email)
        .bind(&data.action)
        .bind(&data.details)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn logs_count(&self, email: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM logs WHERE LOWER(user_email) = LOWER($1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Keep the `cap` newest entries of `email`, delete the rest.
    /// Concurrent callers compute the same keep-set.
    pub async fn logs_trim(&self, email: &str, cap: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM logs
            WHERE LOWER(user_email) = LOWER($1)
              AND id NOT IN (
                  SELECT id FROM logs
                  WHERE LOWER(user_email) = LOWER($1)
                  ORDER BY created_at DESC, id DESC
                  LIMIT $2
              )
            "#,
        )
        .bind(email)
        .bind(cap)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// One page of `email`'s entries, newest first
    pub async fn logs_page(&self, email: &str, limit: i64, offset: i64) -> AppResult<Vec<LogEntry>> {
        let rows = sqlx::query_as::<_, LogEntry>(
            r#"
            SELECT * FROM logs
            WHERE LOWER(user_email) = LOWER($1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(email)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
