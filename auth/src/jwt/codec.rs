use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token codec for issuing and validating signed access tokens.
///
/// The signing algorithm is fixed at construction time and pinned during
/// validation, so the algorithm field inside a presented token is never
/// trusted. Uses HS256 (HMAC with SHA-256) by default.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a new codec signing with HS256.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Default lifetime stamped into issued tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotate secrets periodically
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Create a new codec with an explicit HMAC algorithm.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `algorithm` - One of the HMAC algorithms (HS256/HS384/HS512)
    /// * `ttl` - Default lifetime stamped into issued tokens
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - A non-HMAC algorithm was requested
    pub fn with_algorithm(
        secret: &[u8],
        algorithm: Algorithm,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(Self {
                encoding_key: EncodingKey::from_secret(secret),
                decoding_key: DecodingKey::from_secret(secret),
                algorithm,
                ttl,
            }),
            other => Err(TokenError::UnsupportedAlgorithm(format!("{:?}", other))),
        }
    }

    /// Issue a signed token with the codec's default lifetime.
    ///
    /// # Arguments
    /// * `claims` - Claims to embed; `iat` and `exp` are stamped here
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `Issuance` - Token signing failed
    pub fn issue(&self, claims: Claims) -> Result<String, TokenError> {
        self.issue_with_ttl(claims, self.ttl)
    }

    /// Issue a signed token with an explicit lifetime.
    ///
    /// Sets `iat` to the current time and `exp` to `iat + ttl`, then signs
    /// the whole claims set.
    pub fn issue_with_ttl(&self, mut claims: Claims, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        claims.iat = now.timestamp();
        claims.exp = (now + ttl).timestamp();

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Issuance(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The signature is verified against the codec's key and pinned
    /// algorithm before any claim is read, and expiry is enforced with
    /// zero leeway. `exp` is a required claim.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// The validated claims
    ///
    /// # Errors
    /// * `Malformed` - Token structure or claims payload is unparseable
    /// * `BadSignature` - Signature or algorithm mismatch
    /// * `Expired` - Claims are past their deadline
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        TokenError::BadSignature
                    }
                    ErrorKind::MissingRequiredClaim(claim) => {
                        TokenError::Malformed(format!("missing required claim: {}", claim))
                    }
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
