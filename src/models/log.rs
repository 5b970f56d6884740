//! Audit log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Audit trail entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogEntry {
    pub id: Uuid,
    pub user_email: String,
    pub action: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLogEntry {
    #[validate(email(message = "user_email must be an email"))]
    pub user_email: String,
    #[validate(length(min = 1, message = "action is required"))]
    pub action: String,
    pub details: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl LogQuery {
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Resolve `(page, limit, offset)`: page is at least 1, limit is kept in `1..=cap`.
    /// Page is also capped so the offset always fits in an `i64`.
    pub fn resolve(&self, cap: i64) -> (i64, i64, i64) {
        let limit = self
            .limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, cap.max(1));
        let page = self.page.unwrap_or(1).clamp(1, i64::MAX / limit);
        (page, limit, (page - 1) * limit)
    }
}

/// Number of entries over the retention cap
pub fn retention_excess(count: i64, cap: i64) -> i64 {
    (count - cap.max(0)).max(0)
}

/// One page of a user's log
#[derive(Debug, Serialize, ToSchema)]
pub struct LogPage {
    pub success: bool,
    pub data: Vec<LogEntry>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl LogPage {
    pub fn new(data: Vec<LogEntry>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
        Self {
            success: true,
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excess_is_never_negative() {
        assert_eq!(retention_excess(10, 50), 0);
        assert_eq!(retention_excess(50, 50), 0);
        assert_eq!(retention_excess(53, 50), 3);
        assert_eq!(retention_excess(5, 0), 5);
    }

    #[test]
    fn query_defaults_and_clamps() {
        assert_eq!(LogQuery::default().resolve(50), (1, 10, 0));

        let q = LogQuery { page: Some(3), limit: Some(20) };
        assert_eq!(q.resolve(50), (3, 20, 40));

        let q = LogQuery { page: Some(0), limit: Some(500) };
        assert_eq!(q.resolve(50), (1, 50, 0));

        let q = LogQuery { page: Some(-4), limit: Some(0) };
        assert_eq!(q.resolve(50), (1, 1, 0));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let q = LogQuery { page: Some(i64::MAX), limit: Some(50) };
        let (page, limit, offset) = q.resolve(50);
        assert_eq!(limit, 50);
        assert_eq!(page, i64::MAX / 50);
        assert!(offset >= 0);

        let q = LogQuery { page: Some(i64::MAX), limit: Some(1) };
        let (_, _, offset) = q.resolve(50);
        assert_eq!(offset, i64::MAX - 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(LogPage::new(vec![], 0, 1, 10).total_pages, 0);
        assert_eq!(LogPage::new(vec![], 50, 1, 10).total_pages, 5);
        assert_eq!(LogPage::new(vec![], 41, 1, 10).total_pages, 5);
    }
}
