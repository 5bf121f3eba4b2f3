use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Tag distinguishing the two uses a signed token can be issued for.
///
/// Verification of the tag against the expected use is the caller's job;
/// the codec only guarantees the tag round-trips intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived token authorizing ordinary requests
    Access,
    /// Longer-lived token used solely to obtain a fresh pair
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed token payload.
///
/// `sub`, `type`, and `exp` are mandatory; a token missing any of them does
/// not decode. `email` is carried for convenience and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account email at issuance time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Token use tag (wire name "type")
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl TokenClaims {
    /// Check whether the deadline has passed.
    ///
    /// A token is live only while `exp` is strictly in the future; no grace
    /// window is applied for clock skew.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
