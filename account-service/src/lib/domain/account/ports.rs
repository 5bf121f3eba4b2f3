use async_trait::async_trait;
use auth::TokenClaims;

use crate::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AuthSession;
use crate::domain::account::models::ProfilePatch;
use crate::domain::account::models::RegisterCommand;

/// Port for the authentication gateway operations.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync + 'static {
    /// Authenticate an account by email and password.
    ///
    /// # Arguments
    /// * `email` - Raw email, case-folded before lookup
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Fresh token pair plus the authenticated account
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (one kind)
    /// * `AccountDisabled` - Account exists but is inactive
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Register a new account and sign it in.
    ///
    /// # Arguments
    /// * `command` - Validated command with email, password, and profile
    ///
    /// # Returns
    /// Fresh token pair plus the created account
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `WeakPassword` - Password fails the strength policy
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, AuthError>;

    /// Trade a refresh token for a fresh token pair.
    ///
    /// The presented refresh token is not invalidated; it stays usable until
    /// its own expiry.
    ///
    /// # Arguments
    /// * `refresh_token` - Token issued with the refresh type tag
    ///
    /// # Returns
    /// Fresh token pair plus the account
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, expired, or not a refresh token
    /// * `NotFound` - Backing account record vanished
    /// * `AccountDisabled` - Account was deactivated since issuance
    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError>;

    /// Verify a bearer token and return its claims.
    ///
    /// The guard every protected endpoint depends on: signature, expiry, and
    /// the access type tag are all required.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, expired, or not an access token
    fn resolve_identity(&self, bearer_token: &str) -> Result<TokenClaims, AuthError>;

    /// Load the account behind an already-resolved identity.
    ///
    /// # Errors
    /// * `NotFound` - Record vanished after the token was issued
    async fn current_account(&self, id: &AccountId) -> Result<Account, AuthError>;

    /// Replace an account's password after verifying the current one.
    ///
    /// Outstanding tokens are not revoked; they stay valid until natural
    /// expiry.
    ///
    /// # Errors
    /// * `WrongCurrentPassword` - Current password does not verify
    /// * `WeakPassword` - Replacement fails the strength policy
    /// * `NotFound` - Account does not exist
    async fn change_password(
        &self,
        id: &AccountId,
        current: &str,
        new: &str,
    ) -> Result<(), AuthError>;

    /// Merge a partial profile update into an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn update_profile(
        &self,
        id: &AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, AuthError>;
}

/// Persistence operations for the credential aggregate.
///
/// Implementations may be called concurrently from multiple request handlers;
/// the gateway never assumes serialized access.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve an account by case-folded email.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `StoreError` - Store operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AuthError>;

    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailTaken` - Email uniqueness violated
    /// * `StoreError` - Store operation failed
    async fn insert(&self, account: Account) -> Result<Account, AuthError>;

    /// Replace the stored password hash.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `StoreError` - Store operation failed
    async fn update_hash(&self, id: &AccountId, new_hash: &str) -> Result<(), AuthError>;

    /// Persist updated profile fields.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `StoreError` - Store operation failed
    async fn update_profile(&self, account: &Account) -> Result<Account, AuthError>;
}
