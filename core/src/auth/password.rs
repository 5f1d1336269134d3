//! Password hashing
//!
//! Stored credentials are one-way SHA-256 hex digests and login is a lookup
//! by equality against the stored digest. The comparison is not
//! constant-time; the scheme is inherited from the shipped application and
//! kept as-is.

use sha2::{Digest, Sha256};

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password to a 64-character hex digest
    pub fn hash(password: &str) -> String {
        format!("{:x}", Sha256::digest(password.as_bytes()))
    }

    /// Check a password against a stored digest
    pub fn verify(password: &str, stored_hash: &str) -> bool {
        Self::hash(password) == stored_hash
    }
}
