//! Authentication core library
//!
//! Provides the reusable authentication building blocks for HTTP services:
//! - Password hashing (Argon2id)
//! - Signed, expiring access tokens (issuance and validation)
//! - Authentication coordination
//!
//! The crate is framework-free: services own the HTTP and storage sides and
//! adapt these primitives behind their own gates.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = codec.issue(Claims::for_user(123)).unwrap();
//! let decoded = codec.decode(&token).unwrap();
//! assert_eq!(decoded.user_id, 123);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let auth = Authenticator::new(codec);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let claims = Claims::for_user(123).with_extra("username", "alice");
//! let result = auth.authenticate("password123", &hash, claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.user_id, 123);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Algorithm;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
