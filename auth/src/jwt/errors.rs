use thiserror::Error;

/// Error type for token operations.
///
/// Decoding distinguishes exactly three failure classes so callers can
/// match on them without inspecting strings; signing failures get their
/// own issuance-side variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token cannot be parsed into header/payload/signature, or the
    /// payload is not a valid claims set.
    #[error("Token is malformed: {0}")]
    Malformed(String),

    /// Signature does not verify against the configured key, or the token
    /// header names a different algorithm than the configured one.
    #[error("Token signature is invalid")]
    BadSignature,

    /// Signature verifies but the expiration deadline has passed.
    #[error("Token is expired")]
    Expired,

    /// Signing a new token failed.
    #[error("Failed to issue token: {0}")]
    Issuance(String),

    /// Codec construction was attempted with a non-HMAC algorithm.
    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
