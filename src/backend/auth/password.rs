/**
 * Password Hashing
 *
 * bcrypt with a random per-hash salt. The produced string carries the
 * algorithm version, cost, salt and digest, so it is the only thing the
 * store has to keep.
 *
 * bcrypt only reads the first 72 bytes of its input. The non-truncating
 * variants are used so a longer password is an error on hash and a
 * mismatch on verify, never a silent prefix match.
 *
 * Request handlers go through the `spawn_*` methods, which run the work on
 * tokio's blocking pool.
 */

use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError, DEFAULT_COST};
use thiserror::Error;
use tokio::task::JoinError;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Salt and digest of a real bcrypt hash, re-prefixed with the configured
/// cost when there is no stored hash to check against
const ABSENT_HASH_TAIL: &str = "N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error(transparent)]
    Bcrypt(#[from] BcryptError),
    #[error("password hashing task failed: {0}")]
    Task(#[from] JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password for storage
    ///
    /// Fails with `BcryptError::Truncation` for input over 72 bytes.
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        non_truncating_hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A stored value that is not a bcrypt hash is reported as an error, not as
    /// a mismatch. Input over 72 bytes never matches.
    pub fn verify(&self, plaintext: &str, stored: &str) -> Result<bool, BcryptError> {
        match non_truncating_verify(plaintext, stored) {
            Err(BcryptError::Truncation(_)) => Ok(false),
            result => result,
        }
    }

    /// `hash` on the blocking pool
    pub async fn spawn_hash(self, plaintext: String) -> Result<String, PasswordError> {
        Ok(tokio::task::spawn_blocking(move || self.hash(&plaintext)).await??)
    }

    /// `verify` on the blocking pool
    ///
    /// With no stored hash the same amount of work is done against a
    /// placeholder and the result is always `false`, so a missing account
    /// takes as long to reject as a wrong password.
    pub async fn spawn_verify(self, plaintext: String, stored: Option<String>) -> Result<bool, PasswordError> {
        let matched = tokio::task::spawn_blocking(move || match stored {
            Some(stored) => self.verify(&plaintext, &stored),
            None => self
                .verify(&plaintext, &self.absent_hash())
                .map(|_| false),
        })
        .await??;
        Ok(matched)
    }

    fn absent_hash(&self) -> String {
        format!("$2b${:02}${}", self.cost, ABSENT_HASH_TAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(MIN_COST)
    }

    #[test]
    fn test_hash_verifies() {
        let stored = hasher().hash("correct horse").unwrap();
        assert!(hasher().verify("correct horse", &stored).unwrap());
        assert!(!hasher().verify("battery staple", &stored).unwrap());
    }

    #[test]
    fn test_same_plaintext_hashes_differently() {
        let first = hasher().hash("repeat").unwrap();
        let second = hasher().hash("repeat").unwrap();
        assert_ne!(first, second);
        assert!(hasher().verify("repeat", &first).unwrap());
        assert!(hasher().verify("repeat", &second).unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let stored = hasher().hash("plaintext-secret").unwrap();
        assert!(!stored.contains("plaintext-secret"));
        assert!(stored.starts_with("$2"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        assert!(PasswordHasher::new(MIN_COST - 1).hash("pw").is_err());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(hasher().verify("pw", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordHasher::default().cost(), DEFAULT_COST);
    }

    #[test]
    fn test_long_password_not_hashed() {
        let long = "a".repeat(73);
        assert_matches!(hasher().hash(&long), Err(BcryptError::Truncation(_)));
        assert!(hasher().hash(&"a".repeat(72)).is_ok());
    }

    #[test]
    fn test_bytes_past_72_are_not_ignored() {
        let stored = hasher().hash(&"a".repeat(72)).unwrap();
        let extended = format!("{}WRONG-suffix", "a".repeat(72));
        assert!(!hasher().verify(&extended, &stored).unwrap());
        assert!(hasher().verify(&"a".repeat(72), &stored).unwrap());
    }

    #[tokio::test]
    async fn test_spawned_hash_and_verify() {
        let stored = hasher().spawn_hash("s3cret".to_string()).await.unwrap();
        let ok = hasher()
            .spawn_verify("s3cret".to_string(), Some(stored.clone()))
            .await
            .unwrap();
        let bad = hasher()
            .spawn_verify("other".to_string(), Some(stored))
            .await
            .unwrap();
        assert!(ok);
        assert!(!bad);
    }

    #[tokio::test]
    async fn test_absent_hash_never_matches() {
        assert!(hasher().absent_hash().starts_with("$2b$04$"));
        let matched = hasher().spawn_verify("anything".to_string(), None).await.unwrap();
        assert!(!matched);
    }
}
