use serde::Serialize;

/// Fresh pair of bearer tokens handed to the client.
///
/// Issued on login, registration, and refresh. Never persisted server side;
/// the client is the sole holder and presents the access token on each
/// request until it expires, then trades the refresh token for a new pair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}
