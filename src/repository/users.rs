//! Users repository

use chrono::Utc;
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, Role, UpdateUser, User, UserRow},
};

/// A unique violation on the email index is a conflict, not a server error
fn email_conflict(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict("Email already registered".to_string())
        }
        e => AppError::Database(e),
    }
}

impl Repository {
    /// List all users
    pub async fn users_list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Get user by ID
    pub async fn users_get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get user by email (case-insensitive)
    pub async fn users_get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    /// Check if email already exists
    pub async fn users_email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1) AND ($2::uuid IS NULL OR id != $2))",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a user with an already hashed password
    pub async fn users_create(&self, data: &CreateUser, password_hash: &str, role: Role) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                id, name, email, password, role, phone, image, department_id,
                designation, employee_code, joining_date, address, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, COALESCE($13, NOW()), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(password_hash)
        .bind(role.as_str())
        .bind(&data.phone)
        .bind(&data.image)
        .bind(data.department_id)
        .bind(&data.designation)
        .bind(&data.employee_code)
        .bind(data.joining_date)
        .bind(&data.address)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(email_conflict)?;
        Ok(row.into())
    }

    /// Merge present fields into a user
    pub async fn users_update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                phone = COALESCE($5, phone),
                image = COALESCE($6, image),
                department_id = COALESCE($7, department_id),
                designation = COALESCE($8, designation),
                employee_code = COALESCE($9, employee_code),
                joining_date = COALESCE($10, joining_date),
                address = COALESCE($11, address),
                updated_at = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.role.map(|r| r.as_str()))
        .bind(&data.phone)
        .bind(&data.image)
        .bind(data.department_id)
        .bind(&data.designation)
        .bind(&data.employee_code)
        .bind(data.joining_date)
        .bind(&data.address)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(email_conflict)?
        .map(User::from)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Replace a user's password hash, looked up by email
    pub async fn users_update_password(&self, email: &str, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET password = $2, updated_at = NOW() WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", email)));
        }
        Ok(())
    }

    /// Delete a user
    pub async fn users_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
