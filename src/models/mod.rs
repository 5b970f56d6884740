//! Data models

pub mod asset;
pub mod asset_service;
pub mod category;
pub mod department;
pub mod log;
pub mod receipt;
pub mod request;
pub mod user;

// Re-export commonly used types
pub use asset::{Asset, AssetOverview};
pub use asset_service::AssetService;
pub use category::AssetCategory;
pub use department::Department;
pub use log::LogEntry;
pub use receipt::Receipt;
pub use request::{normalize_status, Request, RequestWithReceipt};
pub use user::{Role, User, UserClaims};
