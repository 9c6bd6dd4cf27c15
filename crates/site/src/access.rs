//! Pluggable admin access check.
//!
//! The unlock surface is a single submitted code string. The check sits
//! behind [`AccessPolicy`] so the shipped constant can be replaced with a
//! real credential store without touching call sites.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Decides whether a submitted access code unlocks the admin session.
pub trait AccessPolicy: Send + Sync {
    fn verify(&self, code: &str) -> bool;
}

// ---------------------------------------------------------------------------
// StaticCode
// ---------------------------------------------------------------------------

/// Exact string comparison against a configured constant.
pub struct StaticCode {
    code: String,
}

impl StaticCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl AccessPolicy for StaticCode {
    fn verify(&self, code: &str) -> bool {
        code == self.code
    }
}

// ---------------------------------------------------------------------------
// HashedCode
// ---------------------------------------------------------------------------

/// Argon2id verification against a stored PHC-format hash, so the plaintext
/// code never lives in configuration.
pub struct HashedCode {
    hash: String,
}

impl HashedCode {
    /// Wrap an existing PHC-format hash (see [`hash_access_code`]).
    pub fn new(phc_hash: impl Into<String>) -> Self {
        Self {
            hash: phc_hash.into(),
        }
    }
}

impl AccessPolicy for HashedCode {
    fn verify(&self, code: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            tracing::error!("Stored access code hash is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(code.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Hash an access code with Argon2id and a random salt, returning the
/// PHC-formatted string for [`HashedCode`].
pub fn hash_access_code(code: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(code.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_code_is_exact_match() {
        let policy = StaticCode::new("shamim2024");
        assert!(policy.verify("shamim2024"));
        assert!(!policy.verify("shamim2024 "));
        assert!(!policy.verify("SHAMIM2024"));
        assert!(!policy.verify(""));
    }

    #[test]
    fn hashed_code_verifies_the_hashed_value_only() {
        let hash = hash_access_code("orbital-access").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));

        let policy = HashedCode::new(hash);
        assert!(policy.verify("orbital-access"));
        assert!(!policy.verify("wrong-code"));
    }

    #[test]
    fn invalid_stored_hash_denies_everything() {
        let policy = HashedCode::new("not-a-phc-string");
        assert!(!policy.verify("anything"));
    }
}
