//! Service requests

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::request::{
        normalize_status, CreateRequest, Request, RequestWithReceipt, UpdateRequest, STATUS_PENDING,
    },
    repository::Repository,
};

/// Normalize a status being written. `all` is a filter token, not a status.
pub fn status_for_write(status: &str) -> AppResult<String> {
    match normalize_status(status) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(AppError::Validation(format!("Invalid status: {:?}", status))),
    }
}

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Request>> {
        self.repository.requests_list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Request> {
        self.repository.requests_get_by_id(id).await
    }

    /// Requests of `email` filtered by a free-text status token
    pub async fn created_by(&self, email: &str, status_token: &str) -> AppResult<Vec<Request>> {
        let status = normalize_status(status_token);
        tracing::debug!(%email, token = %status_token, status = ?status, "Filtering requests");
        self.repository.requests_created_by(email, status.as_deref()).await
    }

    pub async fn with_receipts(&self, email: &str) -> AppResult<Vec<RequestWithReceipt>> {
        self.repository.requests_with_receipts(email).await
    }

    pub async fn create(&self, data: &CreateRequest) -> AppResult<Request> {
        let status = match data.status.as_deref() {
            Some(status) => status_for_write(status)?,
            None => STATUS_PENDING.to_string(),
        };
        let request = self.repository.requests_create(data, &status).await?;
        tracing::info!(id = %request.id, created_by = %request.created_by, "Request created");
        Ok(request)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateRequest) -> AppResult<Request> {
        let status = data.status.as_deref().map(status_for_write).transpose()?;
        let request = self.repository.requests_update(id, data, status.as_deref()).await?;
        if let Some(status) = status {
            tracing::info!(%id, %status, "Request status changed");
        }
        Ok(request)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.requests_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_statuses_are_normalized() {
        assert_eq!(status_for_write("cancelled").unwrap(), "Canceled");
        assert_eq!(status_for_write("working on").unwrap(), "Working On");
        assert_eq!(status_for_write("Pending").unwrap(), "Pending");
    }

    #[test]
    fn filter_tokens_are_not_statuses() {
        assert!(matches!(status_for_write("all"), Err(AppError::Validation(_))));
        assert!(matches!(status_for_write("   "), Err(AppError::Validation(_))));
    }
}
