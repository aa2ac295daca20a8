//! User domain DTOs.

use super::UserRole;

/// Input for creating a user account.
#[derive(Clone, Debug)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}
