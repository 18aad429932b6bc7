use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims for task-service tokens.
///
/// The payload carries the authenticated user identity in `sub`. Tokens are
/// issued without an expiration: `exp` stays `None` unless set explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims identifying a user.
    ///
    /// Sets `sub` and `iat`. No `exp` is set, so the token never expires.
    pub fn for_user(user_id: impl ToString) -> Self {
        Self {
            sub: Some(user_id.to_string()),
            exp: None,
            iat: Some(Utc::now().timestamp()),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Get the user identifier carried in `sub`.
    pub fn user_id(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}
