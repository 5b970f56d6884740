//! Audit log service with per-user retention

use crate::{
    config::LogsConfig,
    error::AppResult,
    models::log::{retention_excess, CreateLogEntry, LogEntry, LogPage, LogQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct LogsService {
    repository: Repository,
    config: LogsConfig,
}

impl LogsService {
    pub fn new(repository: Repository, config: LogsConfig) -> Self {
        Self { repository, config }
    }

    pub async fn create(&self, data: &CreateLogEntry) -> AppResult<LogEntry> {
        self.repository.logs_create(data).await
    }

    /// Append an entry on behalf of another operation. Failures are logged, not returned.
    pub async fn record(&self, email: &str, action: &str, details: Option<String>) {
        let entry = CreateLogEntry {
            user_email: email.to_string(),
            action: action.to_string(),
            details,
            created_at: None,
        };
        if let Err(e) = self.repository.logs_create(&entry).await {
            tracing::warn!(%email, %action, "Failed to record audit entry: {}", e);
        }
    }

    /// Trim `email`'s log to the retention cap, then return the requested page
    pub async fn page(&self, email: &str, query: &LogQuery) -> AppResult<LogPage> {
        let cap = self.config.retention_cap;
        let (page, limit, offset) = query.resolve(cap);

        let mut total = self.repository.logs_count(email).await?;
        if retention_excess(total, cap) > 0 {
            let trimmed = self.repository.logs_trim(email, cap).await?;
            tracing::debug!(%email, trimmed, cap, "Trimmed audit log");
            total = total.saturating_sub(trimmed as i64).min(cap);
        }

        let data = self.repository.logs_page(email, limit, offset).await?;
        Ok(LogPage::new(data, total, page, limit))
    }
}
