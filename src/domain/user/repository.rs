use async_trait::async_trait;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user unless the username is already taken.
    /// An existing username is a silent no-op: returns `false`, no error.
    async fn create_if_absent(&self, dto: CreateUserDto) -> DomainResult<bool>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;
}
