//! Asset service records

use uuid::Uuid;

use super::requests::status_for_write;
use crate::{
    error::AppResult,
    models::asset_service::{AssetService, CreateAssetService, UpdateAssetService},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetServicesService {
    repository: Repository,
}

impl AssetServicesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<AssetService>> {
        self.repository.asset_services_list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<AssetService> {
        self.repository.asset_services_get_by_id(id).await
    }

    pub async fn for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetService>> {
        self.repository.asset_services_for_asset(asset_id).await
    }

    /// Open a service record; the asset goes under maintenance in the same transaction
    pub async fn create(&self, data: &CreateAssetService) -> AppResult<AssetService> {
        let status = data.status.as_deref().map(status_for_write).transpose()?;
        let record = self.repository.asset_services_create(data, status.as_deref()).await?;
        tracing::info!(id = %record.id, asset_id = %record.asset_id, "Asset service opened");
        Ok(record)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateAssetService) -> AppResult<AssetService> {
        let status = data.status.as_deref().map(status_for_write).transpose()?;
        self.repository.asset_services_update(id, data, status.as_deref()).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.asset_services_delete(id).await
    }
}
