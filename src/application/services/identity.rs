//! User management service — application-layer orchestration
//!
//! All identity business logic lives here. HTTP handlers are thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::session::SharedSessionRegistry;
use crate::domain::{CreateUserDto, DomainError, DomainResult, RepositoryProvider, User, UserRole};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::verify_password;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub session_id: String,
    pub username: String,
    pub role: UserRole,
}

/// User service — login, user creation, the default-admin seed.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    sessions: SharedSessionRegistry,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        sessions: SharedSessionRegistry,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            repos,
            sessions,
            jwt_config,
        }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by exact username lookup + password verification and
    /// open a session context landing on the inventory view.
    ///
    /// Unknown usernames and wrong passwords produce the same error, so
    /// the response does not reveal which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResult> {
        let user = self.repos.users().find_by_username(username).await?;

        let Some(user) = user else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let session_id = self.sessions.open(&user.username, user.role);

        let token = create_token(&user.username, user.role, &session_id, &self.jwt_config)
            .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))?;

        info!(username = %user.username, role = %user.role, "Login successful");

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            session_id,
            username: user.username,
            role: user.role,
        })
    }

    /// Close the session context (logout).
    pub fn logout(&self, session_id: &str) {
        self.sessions.close(session_id);
    }

    // ── User management ─────────────────────────────────────────

    /// Create a user. An existing username is a silent no-op per the
    /// legacy admin panel contract; returns whether a row was written.
    pub async fn create_user(&self, username: &str, password: &str, role: &str) -> DomainResult<bool> {
        let role = UserRole::parse(role)
            .ok_or_else(|| DomainError::Validation(format!("Unknown role: {}", role)))?;

        let created = self
            .repos
            .users()
            .create_if_absent(CreateUserDto {
                username: username.to_string(),
                password: password.to_string(),
                role,
            })
            .await?;

        if created {
            info!(username, %role, "User created");
        } else {
            info!(username, "Username already exists; create ignored");
        }

        Ok(created)
    }

    /// All accounts, for the admin panel.
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repos.users().list().await
    }

    // ── Bootstrap ───────────────────────────────────────────────

    /// Seed the default admin account on a fresh store. Guarded by an
    /// existence check on the configured admin username, so a second run
    /// neither duplicates the row nor resets a rotated password.
    pub async fn ensure_default_admin(&self, username: &str, password: &str) -> DomainResult<bool> {
        if self.repos.users().find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let created = self
            .repos
            .users()
            .create_if_absent(CreateUserDto {
                username: username.to_string(),
                password: password.to_string(),
                role: UserRole::Admin,
            })
            .await?;

        if created {
            info!(username, "Default admin created");
            warn!("Default admin credentials are in use. Please rotate the password!");
        }

        Ok(created)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::SessionRegistry;
    use crate::domain::View;
    use crate::infrastructure::database::entities::user as user_entity;
    use crate::infrastructure::database::repositories::test_support::test_db;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use sea_orm::{DatabaseConnection, EntityTrait, Set};

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".into(),
            expiration_hours: 1,
            issuer: "wms-service".into(),
        }
    }

    async fn service() -> (UserService, DatabaseConnection, SharedSessionRegistry) {
        let db = test_db().await;
        let sessions = SessionRegistry::shared();
        let svc = UserService::new(
            Arc::new(SeaOrmRepositoryProvider::new(db.clone())),
            sessions.clone(),
            jwt_config(),
        );
        (svc, db, sessions)
    }

    #[tokio::test]
    async fn login_opens_session_on_inventory_view() {
        let (svc, _db, sessions) = service().await;
        svc.create_user("amira", "s3cret", "admin").await.unwrap();

        let auth = svc.login("amira", "s3cret").await.unwrap();
        assert_eq!(auth.role, UserRole::Admin);
        assert_eq!(auth.token_type, "Bearer");

        let ctx = sessions.context(&auth.session_id).unwrap();
        assert_eq!(ctx.active_view, View::Inventory);
        assert_eq!(ctx.username, "amira");
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_are_indistinguishable() {
        let (svc, _db, _sessions) = service().await;
        svc.create_user("amira", "s3cret", "user").await.unwrap();

        let unknown = svc.login("bogus", "s3cret").await.unwrap_err();
        let wrong = svc.login("amira", "nope").await.unwrap_err();
        assert_eq!(unknown.to_string(), "Invalid credentials");
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn login_is_case_sensitive() {
        let (svc, _db, _sessions) = service().await;
        svc.create_user("amira", "s3cret", "user").await.unwrap();

        assert!(svc.login("Amira", "s3cret").await.is_err());
        assert!(svc.login("amira", "S3cret").await.is_err());
        assert!(svc.login("amira", "s3cret").await.is_ok());
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let (svc, _db, sessions) = service().await;
        svc.create_user("amira", "s3cret", "user").await.unwrap();
        let auth = svc.login("amira", "s3cret").await.unwrap();

        svc.logout(&auth.session_id);
        assert!(sessions.context(&auth.session_id).is_none());
    }

    #[tokio::test]
    async fn create_user_rejects_unknown_role() {
        let (svc, _db, _sessions) = service().await;
        let err = svc.create_user("amira", "pw", "viewer").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn default_admin_seed_is_idempotent() {
        let (svc, db, _sessions) = service().await;

        assert!(svc.ensure_default_admin("admin", "admin123").await.unwrap());
        let first = user_entity::Entity::find_by_id("admin")
            .one(&db)
            .await
            .unwrap()
            .unwrap();

        assert!(!svc.ensure_default_admin("admin", "admin123").await.unwrap());
        let second = user_entity::Entity::find_by_id("admin")
            .one(&db)
            .await
            .unwrap()
            .unwrap();

        // Same single row, password hash untouched.
        assert_eq!(first.password, second.password);
        assert_eq!(svc.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn seed_does_not_reset_a_rotated_password() {
        let (svc, db, _sessions) = service().await;
        svc.ensure_default_admin("admin", "admin123").await.unwrap();

        // Rotate directly in the store, then re-run the seed.
        let rotated = user_entity::ActiveModel {
            username: Set("admin".into()),
            password: Set("rotated-hash".into()),
            role: Set(user_entity::UserRole::Admin),
        };
        user_entity::Entity::update(rotated).exec(&db).await.unwrap();

        svc.ensure_default_admin("admin", "admin123").await.unwrap();
        let row = user_entity::Entity::find_by_id("admin")
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.password, "rotated-hash");
    }

    #[tokio::test]
    async fn legacy_cleartext_rows_still_authenticate() {
        let (svc, db, _sessions) = service().await;

        // A row written by the old dashboard: cleartext password.
        let legacy = user_entity::ActiveModel {
            username: Set("admin".into()),
            password: Set("admin123".into()),
            role: Set(user_entity::UserRole::Admin),
        };
        user_entity::Entity::insert(legacy).exec(&db).await.unwrap();

        let auth = svc.login("admin", "admin123").await.unwrap();
        assert_eq!(auth.role, UserRole::Admin);
        assert!(svc.login("admin", "wrong").await.is_err());
    }
}
