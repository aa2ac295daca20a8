//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored value.
///
/// Stores written by the legacy dashboard hold cleartext passwords; those
/// rows are matched by exact string equality so existing data files keep
/// working until the account is re-created with a hash.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, bcrypt::BcryptError> {
    if is_bcrypt_hash(stored) {
        verify(password, stored)
    } else {
        Ok(password == stored)
    }
}

fn is_bcrypt_hash(stored: &str) -> bool {
    stored.starts_with("$2a$") || stored.starts_with("$2b$") || stored.starts_with("$2y$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("admin123").unwrap();
        assert!(verify_password("admin123", &hash).unwrap());
        assert!(!verify_password("admin124", &hash).unwrap());
    }

    #[test]
    fn legacy_cleartext_rows_match_exactly() {
        assert!(verify_password("admin123", "admin123").unwrap());
        assert!(!verify_password("Admin123", "admin123").unwrap());
        assert!(!verify_password("admin12", "admin123").unwrap());
    }
}
