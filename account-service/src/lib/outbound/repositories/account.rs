use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::account::errors::AuthError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::ports::CredentialStore;

pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the accounts table. Emails are stored already case-folded, so
/// reading one back through `EmailAddress::new` is lossless.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_hash: String,
    full_name: Option<String>,
    phone: Option<String>,
    bio: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AuthError;

    fn try_from(row: AccountRow) -> Result<Self, AuthError> {
        Ok(Account {
            id: AccountId(row.id),
            email: EmailAddress::new(row.email)?,
            password_hash: row.password_hash,
            full_name: row.full_name,
            phone: row.phone,
            bio: row.bio,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

const ACCOUNT_COLUMNS: &str =
    "id, email, password_hash, full_name, phone, bio, is_active, created_at";

#[async_trait]
impl CredentialStore for PostgresAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StoreError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AuthError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StoreError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }

    async fn insert(&self, account: Account) -> Result<Account, AuthError> {
        let email = account.email.as_str().to_string();

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, full_name, phone, bio, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.id.0)
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(&account.full_name)
        .bind(&account.phone)
        .bind(&account.bio)
        .bind(account.is_active)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::EmailTaken(email.clone());
                }
            }
            AuthError::StoreError(e.to_string())
        })?;

        Ok(account)
    }

    async fn update_hash(&self, id: &AccountId, new_hash: &str) -> Result<(), AuthError> {
        let result = sqlx::query("UPDATE accounts SET password_hash = $2 WHERE id = $1")
            .bind(id.0)
            .bind(new_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| AuthError::StoreError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AuthError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn update_profile(&self, account: &Account) -> Result<Account, AuthError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            UPDATE accounts
            SET full_name = $2, phone = $3, bio = $4
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(account.id.0)
        .bind(&account.full_name)
        .bind(&account.phone)
        .bind(&account.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StoreError(e.to_string()))?;

        match row {
            Some(row) => Account::try_from(row),
            None => Err(AuthError::NotFound(account.id.to_string())),
        }
    }
}
