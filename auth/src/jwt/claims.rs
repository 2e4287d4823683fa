use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside an access token.
///
/// A claims set is created for a user, stamped with its lifetime when the
/// token is issued, and never mutated afterwards. Custom fields ride along
/// in the flattened `extra` map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Identifier of the user the token was issued to
    pub user_id: i64,

    /// Issued at (Unix timestamp, assigned at issuance)
    pub iat: i64,

    /// Expiration time (Unix timestamp, assigned at issuance)
    pub exp: i64,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create claims for a user.
    ///
    /// `iat` and `exp` start at zero; the codec stamps them when the token
    /// is issued.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            iat: 0,
            exp: 0,
            extra: HashMap::new(),
        }
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Get username from extra fields (convenience method).
    pub fn username(&self) -> Option<String> {
        self.extra
            .get("username")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    /// Check if the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
