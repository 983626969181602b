//! Password hashing as an opaque capability.
//!
//! Handlers never see bcrypt types; a hashing failure is an internal error,
//! a mismatch is an ordinary `false`.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::AppError;

pub fn hash_password(plain: &str) -> Result<String, AppError> {
    hash(plain, DEFAULT_COST).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        AppError::Internal
    })
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, AppError> {
    verify(plain, hashed).map_err(|e| {
        tracing::error!(error = %e, "password verification failed");
        AppError::Internal
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        // low cost to keep the test quick
        let hashed = bcrypt::hash("salainen", 4).expect("hash");
        assert!(verify_password("salainen", &hashed).expect("verify"));
        assert!(!verify_password("wrong", &hashed).expect("verify"));
    }

    #[test]
    fn stored_hash_is_not_the_plaintext() {
        let hashed = bcrypt::hash("salainen", 4).expect("hash");
        assert_ne!(hashed, "salainen");
    }
}
