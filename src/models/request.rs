//! Service request model and status normalization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const STATUS_PENDING: &str = "Pending";

/// Normalize a free-text status token.
///
/// `None` means "no filter" (the token was `all`). Words are split on
/// whitespace, `_` and `-`, title-cased and joined by a single space.
/// "Cancelled" is spelled "Canceled". Unknown statuses pass through.
pub fn normalize_status(token: &str) -> Option<String> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("all") {
        return None;
    }

    let words: Vec<String> = token
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut title = String::with_capacity(word.len());
                    title.push(title_char(first));
                    title.extend(chars.flat_map(char::to_lowercase));
                    title
                }
                None => String::new(),
            }
        })
        .map(|word| if word == "Cancelled" { "Canceled".to_string() } else { word })
        .collect();

    Some(words.join(" "))
}

/// Uppercase of `c` when that is a single char; `ß` and friends are kept as is
fn title_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// User-submitted change or service request
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Request {
    pub id: Uuid,
    pub title: String,
    pub request_type: Option<String>,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    /// Email of the requester
    pub created_by: String,
    pub status: String,
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request with its latest receipt, if any
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RequestWithReceipt {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub request: Request,
    pub receipt_id: Option<Uuid>,
    pub receipt_issued_by: Option<String>,
    pub receipt_handover_date: Option<DateTime<Utc>>,
    pub receipt_notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub request_type: Option<String>,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    #[validate(email(message = "created_by must be an email"))]
    pub created_by: String,
    /// Defaults to "Pending"
    pub status: Option<String>,
    pub priority: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRequest {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,
    pub request_type: Option<String>,
    pub description: Option<String>,
    pub asset_id: Option<Uuid>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_disables_the_filter() {
        assert_eq!(normalize_status("all"), None);
        assert_eq!(normalize_status("ALL"), None);
        assert_eq!(normalize_status(" All "), None);
    }

    #[test]
    fn case_insensitive() {
        for token in ["working on", "Working On", "WORKING ON", "working_on", "working-on"] {
            assert_eq!(normalize_status(token).as_deref(), Some("Working On"), "{token}");
        }
    }

    #[test]
    fn cancelled_spellings() {
        assert_eq!(normalize_status("cancelled").as_deref(), Some("Canceled"));
        assert_eq!(normalize_status("canceled").as_deref(), Some("Canceled"));
        assert_eq!(normalize_status("CANCELLED").as_deref(), Some("Canceled"));
    }

    #[test]
    fn idempotent() {
        for token in ["pending", "working on", "cancelled", "in  review", "Übergabe", "ßa", "ﬁx it"] {
            let once = normalize_status(token).unwrap();
            assert_eq!(normalize_status(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn multi_char_uppercase_is_not_expanded() {
        assert_eq!(normalize_status("ßa").as_deref(), Some("ßa"));
        assert_eq!(normalize_status("straße").as_deref(), Some("Straße"));
    }

    #[test]
    fn unknown_values_pass_through() {
        assert_eq!(normalize_status("on hold").as_deref(), Some("On Hold"));
        assert_eq!(normalize_status("").as_deref(), Some(""));
    }
}
