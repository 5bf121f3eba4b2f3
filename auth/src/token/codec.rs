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

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::errors::TokenError;
use super::pair::TokenPair;

/// Issues and verifies signed, expiring tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a symmetric secret. The secret and
/// both lifetimes are fixed at construction and shared process-wide, so the
/// codec holds no mutable state and is safe to share across request handlers.
///
/// `decode` enforces signature, structure, and expiry, but NOT the token use
/// tag: a caller expecting an access token must check `claims.kind` itself.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    /// Create a new codec with a secret key and token lifetimes.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `access_ttl` - Access token lifetime
    /// * `refresh_ttl` - Refresh token lifetime, materially longer than
    ///   `access_ttl`
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a short-lived access token for a subject.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_access(&self, sub: &str, email: Option<&str>) -> Result<String, TokenError> {
        self.issue(sub, email, TokenKind::Access, self.access_ttl)
    }

    /// Issue a refresh token for a subject.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_refresh(&self, sub: &str, email: Option<&str>) -> Result<String, TokenError> {
        self.issue(sub, email, TokenKind::Refresh, self.refresh_ttl)
    }

    /// Issue a fresh access/refresh pair for a subject.
    ///
    /// `expires_in` on the returned pair is the access token lifetime in
    /// seconds.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_pair(&self, sub: &str, email: Option<&str>) -> Result<TokenPair, TokenError> {
        Ok(TokenPair::new(
            self.issue_access(sub, email)?,
            self.issue_refresh(sub, email)?,
            self.access_ttl.num_seconds(),
        ))
    }

    fn issue(
        &self,
        sub: &str,
        email: Option<&str>,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: sub.to_string(),
            email: email.map(str::to_string),
            kind,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header::new(self.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a token.
    ///
    /// Fails if the signature does not match, the payload is structurally
    /// malformed (missing subject or deadline), or the deadline is not
    /// strictly in the future. Zero leeway: expiry is compared against
    /// wall-clock time with no grace window.
    ///
    /// # Errors
    /// * `Expired` - Token deadline has passed
    /// * `Invalid` - Signature invalid or payload malformed
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        // The library keeps a token alive at exp == now; the deadline must be
        // strictly in the future.
        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
