//! Business logic services

pub mod asset_services;
pub mod assets;
pub mod catalog;
pub mod logs;
pub mod receipts;
pub mod requests;
pub mod users;

use crate::{
    config::{AuthConfig, LogsConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub assets: assets::AssetsService,
    pub requests: requests::RequestsService,
    pub asset_services: asset_services::AssetServicesService,
    pub receipts: receipts::ReceiptsService,
    pub logs: logs::LogsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, logs_config: LogsConfig) -> Self {
        let logs = logs::LogsService::new(repository.clone(), logs_config);
        Self {
            users: users::UsersService::new(repository.clone(), auth_config, logs.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            assets: assets::AssetsService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            asset_services: asset_services::AssetServicesService::new(repository.clone()),
            receipts: receipts::ReceiptsService::new(repository.clone()),
            logs,
            repository,
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        self.repository.ping().await
    }
}
