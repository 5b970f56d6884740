//! Asset Tracker
//!
//! REST JSON API for tracking organizational assets: employees, departments,
//! asset categories, assignments, service requests, handover receipts and a
//! per-user audit log.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
