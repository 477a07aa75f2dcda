//! Password hashing with Argon2id.
//!
//! Digests are stored as PHC strings (`$argon2id$v=19$...`), which carry the
//! algorithm, parameters and salt alongside the hash.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Hashing failed. Only possible with invalid Argon2 parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to hash password: {0}")]
pub struct PasswordHashError(String);

/// A stored password digest in PHC string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    phc: String,
}

impl PasswordDigest {
    /// Hashes a password with a fresh random salt.
    pub fn derive(password: &SecretString) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(rand::thread_rng());
        let phc = Argon2::default()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map_err(|e| PasswordHashError(e.to_string()))?
            .to_string();
        Ok(Self { phc })
    }

    /// Accepts a stored PHC string. Malformed input yields `None`.
    pub fn parse(stored: &str) -> Option<Self> {
        PasswordHash::new(stored).ok()?;
        Some(Self {
            phc: stored.to_string(),
        })
    }

    /// Storage form.
    pub fn encode(&self) -> String {
        self.phc.clone()
    }

    /// Checks a candidate password against this digest.
    pub fn verify(&self, candidate: &SecretString) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.phc) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[test]
    fn verify_accepts_the_hashed_password() {
        let digest = PasswordDigest::derive(&secret("segredo1")).unwrap();
        assert!(digest.verify(&secret("segredo1")));
    }

    #[test]
    fn verify_rejects_other_passwords() {
        let digest = PasswordDigest::derive(&secret("segredo1")).unwrap();
        assert!(!digest.verify(&secret("segredo2")));
        assert!(!digest.verify(&secret("")));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let a = PasswordDigest::derive(&secret("segredo1")).unwrap();
        let b = PasswordDigest::derive(&secret("segredo1")).unwrap();
        assert_ne!(a.encode(), b.encode());
    }

    #[test]
    fn digest_is_stored_as_argon2id_phc() {
        let digest = PasswordDigest::derive(&secret("abcdef")).unwrap();
        assert!(digest.encode().starts_with("$argon2id$"));
    }

    #[test]
    fn encode_then_parse_still_verifies() {
        let stored = PasswordDigest::derive(&secret("abcdef")).unwrap().encode();

        let parsed = PasswordDigest::parse(&stored).unwrap();
        assert!(parsed.verify(&secret("abcdef")));
        assert!(!parsed.verify(&secret("abcdeg")));
    }

    #[test]
    fn parse_rejects_malformed_storage() {
        assert!(PasswordDigest::parse("no-separator").is_none());
        assert!(PasswordDigest::parse("").is_none());
        assert!(PasswordDigest::parse("salt$0123abcd").is_none());
    }
}
