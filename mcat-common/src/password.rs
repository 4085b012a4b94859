//! Salted password hashing for stored users
//!
//! Passwords are never stored or returned in clear text. The stored value is
//! SHA-256 over `salt || password`, both hex encoded.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Stored form of a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    /// 64 hex characters
    pub hash: String,
    /// 32 hex characters (16 random bytes)
    pub salt: String,
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> PasswordHash {
    let mut salt_bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt: String = salt_bytes.iter().map(|b| format!("{:02x}", b)).collect();

    PasswordHash {
        hash: hash_with_salt(password, &salt),
        salt,
    }
}

/// SHA-256 of `salt || password` as 64 hex characters
pub fn hash_with_salt(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a clear-text password against its stored form
pub fn verify_password(password: &str, stored: &PasswordHash) -> bool {
    hash_with_salt(password, &stored.salt) == stored.hash
}
