//! Departments and asset categories service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        category::{AssetCategory, CreateAssetCategory, UpdateAssetCategory},
        department::{CreateDepartment, Department, UpdateDepartment},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.repository.departments_list().await
    }

    pub async fn get_department(&self, id: Uuid) -> AppResult<Department> {
        self.repository.departments_get_by_id(id).await
    }

    pub async fn create_department(&self, data: &CreateDepartment) -> AppResult<Department> {
        let department = self.repository.departments_create(data).await?;
        tracing::info!(id = %department.id, code = %department.code, "Department created");
        Ok(department)
    }

    pub async fn update_department(&self, id: Uuid, data: &UpdateDepartment) -> AppResult<Department> {
        self.repository.departments_update(id, data).await
    }

    pub async fn delete_department(&self, id: Uuid) -> AppResult<()> {
        self.repository.departments_delete(id).await?;
        tracing::info!(%id, "Department deleted");
        Ok(())
    }

    pub async fn list_categories(&self) -> AppResult<Vec<AssetCategory>> {
        self.repository.categories_list().await
    }

    pub async fn get_category(&self, id: Uuid) -> AppResult<AssetCategory> {
        self.repository.categories_get_by_id(id).await
    }

    pub async fn create_category(&self, data: &CreateAssetCategory) -> AppResult<AssetCategory> {
        let category = self.repository.categories_create(data).await?;
        tracing::info!(id = %category.id, code = %category.code, "Asset category created");
        Ok(category)
    }

    pub async fn update_category(&self, id: Uuid, data: &UpdateAssetCategory) -> AppResult<AssetCategory> {
        self.repository.categories_update(id, data).await
    }

    pub async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        self.repository.categories_delete(id).await?;
        tracing::info!(%id, "Asset category deleted");
        Ok(())
    }
}
