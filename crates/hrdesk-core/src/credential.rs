//! Credential hashing boundary.
//!
//! Passwords are never stored or compared in plain text. Everything that
//! touches a password goes through a `CredentialHasher`.

use crate::error::Result;

/// Hashes new passwords and verifies candidates against stored hashes.
pub trait CredentialHasher: Send + Sync {
    /// Hashes a password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String>;

    /// Checks a candidate password against a stored hash.
    ///
    /// Returns `false` for malformed or empty hashes instead of erroring, so a
    /// corrupt record simply cannot sign in.
    fn verify(&self, password: &str, password_hash: &str) -> bool;
}

