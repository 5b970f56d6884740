//! Assets repository

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::asset::{
        Asset, AssetOverview, CreateAsset, UpdateAsset, DEFAULT_CONDITION, STATUS_ASSIGNED,
        STATUS_AVAILABLE,
    },
};

const OVERVIEW_SELECT: &str = r#"
    SELECT a.*,
           d.name AS department_name,
           c.name AS category_name,
           c.icon AS category_icon,
           u.name AS assignee_name
    FROM assets a
    LEFT JOIN departments d ON d.id = a.department_id
    LEFT JOIN asset_categories c ON c.id = a.category_id
    LEFT JOIN users u ON LOWER(u.email) = LOWER(a.assigned_to)
"#;

impl Repository {
    pub async fn assets_list(&self) -> AppResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn assets_get_by_id(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Assets currently assigned to `email`
    pub async fn assets_assigned_to(&self, email: &str) -> AppResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets WHERE LOWER(assigned_to) = LOWER($1) ORDER BY assigned_at DESC NULLS LAST",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Assets joined with department, category and assignee
    pub async fn assets_overview(&self) -> AppResult<Vec<AssetOverview>> {
        let query = format!("{} ORDER BY a.created_at DESC", OVERVIEW_SELECT);
        let rows = sqlx::query_as::<_, AssetOverview>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn assets_create(&self, data: &CreateAsset) -> AppResult<Asset> {
        let status = match (&data.status, &data.assigned_to) {
            (Some(status), _) => status.as_str(),
            (None, Some(_)) => STATUS_ASSIGNED,
            (None, None) => STATUS_AVAILABLE,
        };
        let assigned_at = data.assigned_to.as_ref().map(|_| Utc::now());

        let row = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (
                id, name, serial_number, category_id, department_id, condition, status,
                assigned_to, assigned_at, return_deadline, purchase_date, purchase_price,
                location, image, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, COALESCE($16, NOW()), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(data.category_id)
        .bind(data.department_id)
        .bind(data.condition.as_deref().unwrap_or(DEFAULT_CONDITION))
        .bind(status)
        .bind(&data.assigned_to)
        .bind(assigned_at)
        .bind(data.return_deadline)
        .bind(data.purchase_date)
        .bind(data.purchase_price)
        .bind(&data.location)
        .bind(&data.image)
        .bind(&data.notes)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn assets_update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                name = COALESCE($2, name),
                serial_number = COALESCE($3, serial_number),
                category_id = COALESCE($4, category_id),
                department_id = COALESCE($5, department_id),
                condition = COALESCE($6, condition),
                status = COALESCE($7, status),
                assigned_to = COALESCE($8, assigned_to),
                return_deadline = COALESCE($9, return_deadline),
                purchase_date = COALESCE($10, purchase_date),
                purchase_price = COALESCE($11, purchase_price),
                location = COALESCE($12, location),
                image = COALESCE($13, image),
                notes = COALESCE($14, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(data.category_id)
        .bind(data.department_id)
        .bind(&data.condition)
        .bind(&data.status)
        .bind(&data.assigned_to)
        .bind(data.return_deadline)
        .bind(data.purchase_date)
        .bind(data.purchase_price)
        .bind(&data.location)
        .bind(&data.image)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Hand an asset to a user
    pub async fn assets_assign(
        &self,
        id: Uuid,
        email: &str,
        return_deadline: Option<DateTime<Utc>>,
    ) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                assigned_to = $2,
                assigned_at = NOW(),
                return_deadline = $3,
                status = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(return_deadline)
        .bind(STATUS_ASSIGNED)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Clear the assignment state of an asset
    pub async fn assets_return(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                assigned_to = NULL,
                assigned_at = NULL,
                return_deadline = NULL,
                status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(STATUS_AVAILABLE)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    pub async fn assets_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }
}
