//! Handover receipts

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::receipt::{CreateReceipt, Receipt},
    repository::Repository,
};

/// Parse a comma separated id list; blanks are skipped
pub fn parse_request_ids(raw: &str) -> AppResult<Vec<Uuid>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Uuid::parse_str(s).map_err(|_| AppError::Validation(format!("Invalid request id: {}", s)))
        })
        .collect()
}

#[derive(Clone)]
pub struct ReceiptsService {
    repository: Repository,
}

impl ReceiptsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Receipt>> {
        self.repository.receipts_list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Receipt> {
        self.repository.receipts_get_by_id(id).await
    }

    pub async fn for_requests(&self, request_ids: &[Uuid]) -> AppResult<Vec<Receipt>> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.receipts_for_requests(request_ids).await
    }

    pub async fn create(&self, data: &CreateReceipt) -> AppResult<Receipt> {
        let receipt = self.repository.receipts_create(data).await?;
        tracing::info!(id = %receipt.id, request_id = %receipt.request_id, "Receipt issued");
        Ok(receipt)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.receipts_delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let ids = parse_request_ids(&format!("{a}, {b},")).unwrap();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn empty_list_is_fine() {
        assert!(parse_request_ids("").unwrap().is_empty());
        assert!(parse_request_ids(" , ").unwrap().is_empty());
    }

    #[test]
    fn malformed_id_is_rejected() {
        let err = parse_request_ids("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
