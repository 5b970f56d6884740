//! User (employee) model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "employee" | "user" => Ok(Role::Employee),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Internal row structure for database queries (role stored as text)
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password: String,
    role: String,
    phone: Option<String>,
    image: Option<String>,
    department_id: Option<Uuid>,
    designation: Option<String>,
    employee_code: Option<String>,
    joining_date: Option<NaiveDate>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            role: row.role.parse().unwrap_or(Role::Employee),
            phone: row.phone,
            image: row.image,
            department_id: row.department_id,
            designation: row.designation,
            employee_code: row.employee_code,
            joining_date: row.joining_date,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Full user model
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
    /// Profile image URL
    pub image: Option<String>,
    pub department_id: Option<Uuid>,
    /// Job title
    pub designation: Option<String>,
    pub employee_code: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request (admin) and public sign-up body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Ignored on sign-up
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<Uuid>,
    pub designation: Option<String>,
    pub employee_code: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Update user request; present fields overwrite stored ones
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub department_id: Option<Uuid>,
    pub designation: Option<String>,
    pub employee_code: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub address: Option<String>,
}

/// New password for `PUT /Users/UpdatedPassword/{email}`
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePassword {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Candidate password for `POST /Users/VerifyPassword/{email}`
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyPassword {
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PasswordCheck {
    pub valid: bool,
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// User email
    pub sub: String,
    pub user_id: Uuid,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization("Administrator privileges required".to_string()))
        }
    }

    /// Admin or manager
    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }

    pub fn require_manager(&self) -> Result<(), AppError> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(AppError::Authorization("Manager privileges required".to_string()))
        }
    }

    /// Allow the owner of `email` or a manager
    pub fn require_self_or_manager(&self, email: &str) -> Result<(), AppError> {
        if self.is_manager() || self.sub.eq_ignore_ascii_case(email) {
            Ok(())
        } else {
            Err(AppError::Authorization("Not allowed to access another user's data".to_string()))
        }
    }

    /// Allow the owner of `email` or an admin
    pub fn require_self_or_admin(&self, email: &str) -> Result<(), AppError> {
        if self.is_admin() || self.sub.eq_ignore_ascii_case(email) {
            Ok(())
        } else {
            Err(AppError::Authorization("Not allowed to access another user's data".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Role) -> UserClaims {
        let now = chrono::Utc::now().timestamp();
        UserClaims {
            sub: "jane@example.com".to_string(),
            user_id: Uuid::new_v4(),
            role,
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn token_roundtrip_keeps_role() {
        let token = claims(Role::Manager).create_token("secret").unwrap();
        let parsed = UserClaims::from_token(&token, "secret").unwrap();
        assert_eq!(parsed.role, Role::Manager);
        assert_eq!(parsed.sub, "jane@example.com");
        assert!(UserClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn self_or_admin_is_case_insensitive() {
        let employee = claims(Role::Employee);
        assert!(employee.require_self_or_admin("JANE@example.com").is_ok());
        assert!(employee.require_self_or_admin("bob@example.com").is_err());
        assert!(claims(Role::Admin).require_self_or_admin("bob@example.com").is_ok());
        assert!(employee.require_admin().is_err());
    }

    #[test]
    fn managers_see_other_users_but_are_not_admins() {
        let manager = claims(Role::Manager);
        assert!(manager.require_manager().is_ok());
        assert!(manager.require_self_or_manager("bob@example.com").is_ok());
        assert!(manager.require_self_or_admin("bob@example.com").is_err());
        assert!(claims(Role::Employee).require_manager().is_err());
    }

    #[test]
    fn role_parsing() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::Employee));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn short_password_fails_validation() {
        let body = CreateUser {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "123".into(),
            role: None,
            phone: None,
            image: None,
            department_id: None,
            designation: None,
            employee_code: None,
            joining_date: None,
            address: None,
            created_at: None,
        };
        assert!(body.validate().is_err());
    }
}
