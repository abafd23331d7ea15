// Password hashing and verification

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;

use crate::auth::error::AuthError;

/// Password hashing service backed by Argon2id.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Hash a password with a freshly generated random salt. Two calls on
    /// the same input produce different PHC strings, both of which verify.
    pub fn hash(plaintext: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHash)
    }

    /// Verify a password against a stored PHC string. A malformed stored
    /// hash fails closed: the result is `false`, never an error.
    pub fn verify(plaintext: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = PasswordHasher::hash("secret123").unwrap();
        assert!(PasswordHasher::verify("secret123", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = PasswordHasher::hash("secret123").unwrap();
        assert!(!PasswordHasher::verify("secret124", &hash));
    }

    #[test]
    fn test_salt_randomization() {
        let first = PasswordHasher::hash("secret123").unwrap();
        let second = PasswordHasher::hash("secret123").unwrap();
        assert_ne!(first, second, "same input must produce different hashes");
        assert!(PasswordHasher::verify("secret123", &first));
        assert!(PasswordHasher::verify("secret123", &second));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = PasswordHasher::hash("secret123").unwrap();
        assert_ne!(hash, "secret123");
    }

    #[test]
    fn test_malformed_stored_hash_fails_closed() {
        assert!(!PasswordHasher::verify("secret123", ""));
        assert!(!PasswordHasher::verify("secret123", "not-a-phc-string"));
        assert!(!PasswordHasher::verify("secret123", "$argon2id$garbage"));
    }
}
