use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::domain::{CreateUserDto, DomainError, DomainResult, User, UserRepository, UserRole};
use crate::infrastructure::crypto::password::hash_password;
use crate::infrastructure::database::entities::user;

use super::db_err;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::User => UserRole::User,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::User => user::UserRole::User,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        username: model.username,
        password: model.password,
        role: entity_role_to_domain(model.role),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create_if_absent(&self, dto: CreateUserDto) -> DomainResult<bool> {
        let password = hash_password(&dto.password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let new_user = user::ActiveModel {
            username: Set(dto.username),
            password: Set(password),
            role: Set(domain_role_to_entity(dto.role)),
        };

        // INSERT ... ON CONFLICT(username) DO NOTHING, the legacy
        // "INSERT OR IGNORE" contract: an existing row is left untouched.
        let inserted = user::Entity::insert(new_user)
            .on_conflict(
                OnConflict::column(user::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(inserted > 0)
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(username)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find().all(&self.db).await.map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::test_db;

    fn dto(username: &str, password: &str, role: UserRole) -> CreateUserDto {
        CreateUserDto {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    #[tokio::test]
    async fn create_hashes_password_and_finds_by_username() {
        let repo = SeaOrmUserRepository::new(test_db().await);

        assert!(repo
            .create_if_absent(dto("amira", "s3cret", UserRole::User))
            .await
            .unwrap());

        let user = repo.find_by_username("amira").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::User);
        assert_ne!(user.password, "s3cret");
    }

    #[tokio::test]
    async fn duplicate_username_is_a_silent_no_op() {
        let repo = SeaOrmUserRepository::new(test_db().await);

        assert!(repo
            .create_if_absent(dto("amira", "first", UserRole::User))
            .await
            .unwrap());
        let stored = repo.find_by_username("amira").await.unwrap().unwrap();

        // Second create with a different password and role changes nothing.
        assert!(!repo
            .create_if_absent(dto("amira", "second", UserRole::Admin))
            .await
            .unwrap());
        let after = repo.find_by_username("amira").await.unwrap().unwrap();
        assert_eq!(after.password, stored.password);
        assert_eq!(after.role, UserRole::User);

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn username_lookup_is_case_sensitive() {
        let repo = SeaOrmUserRepository::new(test_db().await);

        repo.create_if_absent(dto("amira", "pw", UserRole::User))
            .await
            .unwrap();

        assert!(repo.find_by_username("Amira").await.unwrap().is_none());
    }
}
