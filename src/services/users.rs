//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use super::logs::LogsService;
use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{CreateUser, Role, UpdateUser, User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
    logs: LogsService,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig, logs: LogsService) -> Self {
        Self { repository, config, logs }
    }

    /// Authenticate by email and password, returning a JWT and the user
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users_get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !verify_password(&user.password, password)? {
            tracing::info!(%email, "Rejected credentials");
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        }

        let token = self.create_token_for_user(&user)?;
        Ok((token, user))
    }

    /// Token lifetime in seconds
    pub fn token_lifetime(&self) -> i64 {
        self.config.jwt_expiration_hours as i64 * 3600
    }

    fn create_token_for_user(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role,
            exp: now + self.token_lifetime(),
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users_list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository.users_get_by_id(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.repository
            .users_get_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))
    }

    /// Public registration; the role is always `employee`
    pub async fn sign_up(&self, user: CreateUser) -> AppResult<User> {
        let created = self.insert(&user, Role::Employee).await?;
        self.logs.record(&created.email, "sign_up", None).await;
        Ok(created)
    }

    /// Admin creation, honoring the requested role
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        let role = user.role.unwrap_or(Role::Employee);
        self.insert(&user, role).await
    }

    /// Create the configured bootstrap admin if that email is not taken yet
    pub async fn ensure_bootstrap_admin(&self) -> AppResult<Option<User>> {
        let (Some(email), Some(password)) = (
            self.config.bootstrap_admin_email.as_deref(),
            self.config.bootstrap_admin_password.as_deref(),
        ) else {
            return Ok(None);
        };

        if self.repository.users_email_exists(email, None).await? {
            return Ok(None);
        }

        let admin = CreateUser {
            name: "Administrator".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Some(Role::Admin),
            phone: None,
            image: None,
            department_id: None,
            designation: None,
            employee_code: None,
            joining_date: None,
            address: None,
            created_at: None,
        };
        let created = self.insert(&admin, Role::Admin).await?;
        tracing::warn!(%email, "Created bootstrap admin account");
        Ok(Some(created))
    }

    async fn insert(&self, user: &CreateUser, role: Role) -> AppResult<User> {
        if self.repository.users_email_exists(&user.email, None).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let hash = hash_password(&user.password)?;
        let created = self.repository.users_create(user, &hash, role).await?;
        tracing::info!(id = %created.id, role = %role, "User created");
        Ok(created)
    }

    /// Merge fields into a user. Only admins may change roles.
    pub async fn update_user(&self, id: Uuid, user: UpdateUser, claims: &UserClaims) -> AppResult<User> {
        if claims.user_id != id {
            claims.require_admin()?;
        }
        if user.role.is_some() {
            claims.require_admin()?;
        }

        if let Some(ref email) = user.email {
            if self.repository.users_email_exists(email, Some(id)).await? {
                return Err(AppError::Conflict("Email already registered".to_string()));
            }
        }

        self.repository.users_update(id, &user).await
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repository.users_delete(id).await?;
        tracing::info!(%id, "User deleted");
        Ok(())
    }

    pub async fn update_password(&self, email: &str, password: &str) -> AppResult<()> {
        let hash = hash_password(password)?;
        self.repository.users_update_password(email, &hash).await?;
        self.logs.record(email, "password_updated", None).await;
        Ok(())
    }

    /// Check a candidate password against the stored hash
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<bool> {
        let user = self.get_by_email(email).await?;
        verify_password(&user.password, password)
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against an argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "hunter22").unwrap());
        assert!(!verify_password(&hash, "hunter23").unwrap());
    }

    #[tokio::test]
    async fn bootstrap_admin_is_skipped_without_credentials() {
        use crate::config::{AppConfig, LogsConfig};
        use sqlx::postgres::PgPoolOptions;

        let config = AppConfig::default();
        let pool = PgPoolOptions::new().connect_lazy(&config.database.url).unwrap();
        let repository = Repository::new(pool);
        let logs = LogsService::new(repository.clone(), LogsConfig::default());
        let service = UsersService::new(repository, config.auth, logs);

        assert!(service.ensure_bootstrap_admin().await.unwrap().is_none());
    }

    #[test]
    fn garbage_hash_is_internal_error() {
        assert!(matches!(
            verify_password("plaintext", "plaintext"),
            Err(AppError::Internal(_))
        ));
    }
}
