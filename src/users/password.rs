use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::error::StoreError;

/// Hash a plaintext password into credential material fit for storage.
/// Nothing in the store does this implicitly; callers hash before persisting.
pub fn hash_password(plain: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            StoreError::Credential(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Check a plaintext password against stored credential material.
pub fn verify_password(plain: &str, stored: &str) -> Result<bool, StoreError> {
    let parsed = PasswordHash::new(stored).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        StoreError::Credential(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_its_own_password() {
        let hash = hash_password("hunter2hunter2").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2hunter2", &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify_password("Tr0ub4dor&3", &hash).expect("verify should not error"));
    }

    #[test]
    fn malformed_stored_material_is_a_credential_error() {
        let err = verify_password("anything", "plaintext-left-over-from-import").unwrap_err();
        assert!(matches!(err, StoreError::Credential(_)));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }
}
