use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error case: a record that cannot be parsed is
/// reported as a mismatch by [`verify`](super::PasswordHasher::verify).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
