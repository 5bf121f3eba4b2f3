use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use account_service::account::errors::AuthError;
use account_service::account::models::Account;
use account_service::account::models::AccountId;
use account_service::account::ports::CredentialStore;
use account_service::account::service::AuthGateway;
use async_trait::async_trait;
use auth::TokenCodec;
use chrono::Duration;
use uuid::Uuid;

/// Credential store backed by a process-local map, standing in for Postgres.
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Flip the activity flag, simulating an operator disabling the account.
    pub fn set_active(&self, id: &AccountId, active: bool) {
        if let Some(account) = self.accounts.write().unwrap().get_mut(&id.0) {
            account.is_active = active;
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
        Ok(self
            .accounts
            .read()
            .unwrap()
            .values()
            .find(|account| account.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AuthError> {
        Ok(self.accounts.read().unwrap().get(&id.0).cloned())
    }

    async fn insert(&self, account: Account) -> Result<Account, AuthError> {
        let mut accounts = self.accounts.write().unwrap();

        if accounts.values().any(|a| a.email == account.email) {
            return Err(AuthError::EmailTaken(account.email.as_str().to_string()));
        }

        accounts.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn update_hash(&self, id: &AccountId, new_hash: &str) -> Result<(), AuthError> {
        let mut accounts = self.accounts.write().unwrap();
        match accounts.get_mut(&id.0) {
            Some(account) => {
                account.password_hash = new_hash.to_string();
                Ok(())
            }
            None => Err(AuthError::NotFound(id.to_string())),
        }
    }

    async fn update_profile(&self, account: &Account) -> Result<Account, AuthError> {
        let mut accounts = self.accounts.write().unwrap();
        match accounts.get_mut(&account.id.0) {
            Some(stored) => {
                *stored = account.clone();
                Ok(account.clone())
            }
            None => Err(AuthError::NotFound(account.id.to_string())),
        }
    }
}

/// Gateway wired to an in-memory store with test token lifetimes.
pub fn test_gateway() -> (Arc<InMemoryAccountStore>, AuthGateway<InMemoryAccountStore>) {
    let store = Arc::new(InMemoryAccountStore::new());
    let codec = TokenCodec::new(
        b"integration_test_secret_32_bytes!!",
        Duration::minutes(30),
        Duration::days(7),
    );

    (Arc::clone(&store), AuthGateway::new(store, codec))
}
