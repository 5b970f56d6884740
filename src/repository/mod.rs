//! Repository layer for database operations
//!
//! Each submodule adds its entity's queries as `Repository` methods
//! prefixed with the table name.

pub mod asset_services;
pub mod assets;
pub mod categories;
pub mod departments;
pub mod logs;
pub mod receipts;
pub mod requests;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
