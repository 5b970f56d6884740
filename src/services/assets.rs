//! Assets service

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::asset::{Asset, AssetOverview, CreateAsset, UpdateAsset},
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        self.repository.assets_list().await
    }

    pub async fn overview(&self) -> AppResult<Vec<AssetOverview>> {
        self.repository.assets_overview().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Asset> {
        self.repository.assets_get_by_id(id).await
    }

    pub async fn assigned_to(&self, email: &str) -> AppResult<Vec<Asset>> {
        self.repository.assets_assigned_to(email).await
    }

    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        let asset = self.repository.assets_create(data).await?;
        tracing::info!(id = %asset.id, serial = %asset.serial_number, "Asset created");
        Ok(asset)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        self.repository.assets_update(id, data).await
    }

    pub async fn assign(&self, id: Uuid, email: &str, return_deadline: Option<DateTime<Utc>>) -> AppResult<Asset> {
        let asset = self.repository.assets_assign(id, email, return_deadline).await?;
        tracing::info!(%id, assignee = %email, "Asset assigned");
        Ok(asset)
    }

    pub async fn return_asset(&self, id: Uuid) -> AppResult<Asset> {
        let asset = self.repository.assets_return(id).await?;
        tracing::info!(%id, "Asset returned");
        Ok(asset)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.assets_delete(id).await
    }
}
