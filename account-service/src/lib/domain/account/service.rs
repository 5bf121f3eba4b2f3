use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenClaims;
use auth::TokenCodec;
use auth::TokenKind;
use chrono::Utc;

use crate::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::AuthSession;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::ProfilePatch;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::ports::AuthGatewayPort;
use crate::domain::account::ports::CredentialStore;

/// Domain service implementing the authentication flows.
///
/// Composes the password hasher and token codec over an injected credential
/// store. Holds no mutable state: every operation is a function of its
/// inputs, the store contents, and the token configuration fixed at startup,
/// so a single instance serves concurrent requests without locking.
pub struct AuthGateway<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

impl<CS> AuthGateway<CS>
where
    CS: CredentialStore,
{
    /// Create a new gateway with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `token_codec` - Configured token codec (secret and lifetimes fixed)
    pub fn new(store: Arc<CS>, token_codec: TokenCodec) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_codec,
        }
    }

    fn issue_session(&self, account: Account) -> Result<AuthSession, AuthError> {
        let tokens = self
            .token_codec
            .issue_pair(&account.id.to_string(), Some(account.email.as_str()))?;

        Ok(AuthSession { account, tokens })
    }
}

#[async_trait]
impl<CS> AuthGatewayPort for AuthGateway<CS>
where
    CS: CredentialStore,
{
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        // An unparseable email cannot match any stored account, so it gets
        // the same failure as an unknown one.
        let email =
            EmailAddress::new(email.to_string()).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .store
            .find_by_email(email.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Unknown email and wrong password are one failure kind. The timing
        // difference between the two paths remains an enumeration
        // side-channel; see DESIGN.md.
        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        if !account.is_active {
            return Err(AuthError::AccountDisabled);
        }

        self.issue_session(account)
    }

    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, AuthError> {
        if self
            .store
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken(command.email.as_str().to_string()));
        }

        if !auth::validate_strength(&command.password) {
            return Err(AuthError::WeakPassword);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            email: command.email,
            password_hash,
            full_name: Some(command.full_name),
            phone: command.phone,
            bio: None,
            is_active: true,
            created_at: Utc::now(),
        };

        let created = self.store.insert(account).await?;
        self.issue_session(created)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let claims = self
            .token_codec
            .decode(refresh_token)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.kind != TokenKind::Refresh {
            return Err(AuthError::InvalidToken);
        }

        let id = AccountId::from_string(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        let account = self
            .store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AuthError::NotFound(claims.sub.clone()))?;

        if !account.is_active {
            return Err(AuthError::AccountDisabled);
        }

        // No rotation: the presented refresh token stays valid until its own
        // expiry alongside the new pair.
        self.issue_session(account)
    }

    fn resolve_identity(&self, bearer_token: &str) -> Result<TokenClaims, AuthError> {
        let claims = self
            .token_codec
            .decode(bearer_token)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.kind != TokenKind::Access {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    async fn current_account(&self, id: &AccountId) -> Result<Account, AuthError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::NotFound(id.to_string()))
    }

    async fn change_password(
        &self,
        id: &AccountId,
        current: &str,
        new: &str,
    ) -> Result<(), AuthError> {
        let account = self.current_account(id).await?;

        if !self.password_hasher.verify(current, &account.password_hash) {
            return Err(AuthError::WrongCurrentPassword);
        }

        if !auth::validate_strength(new) {
            return Err(AuthError::WeakPassword);
        }

        let new_hash = self.password_hasher.hash(new)?;

        // Outstanding tokens are not revoked; they expire naturally.
        self.store.update_hash(id, &new_hash).await
    }

    async fn update_profile(
        &self,
        id: &AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, AuthError> {
        let mut account = self.current_account(id).await?;
        patch.apply(&mut account);
        self.store.update_profile(&account).await
    }
}
