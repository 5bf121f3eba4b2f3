use std::fmt;

use auth::TokenPair;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::AccountIdError;
use crate::account::errors::EmailError;

/// Credential aggregate entity.
///
/// One registered account: the case-folded unique email, the password hash
/// (never the plaintext), profile fields, and the activity flag checked at
/// login and refresh. Email uniqueness is enforced by the store.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Case-folds to lowercase on construction so uniqueness checks and lookups
/// always compare the canonical form, and validates the `local@domain.tld`
/// shape via the core policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, case-folded email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Candidate does not have `local@domain.tld` shape
    pub fn new(email: String) -> Result<Self, EmailError> {
        let folded = email.trim().to_lowercase();
        if auth::validate_email_format(&folded) {
            Ok(Self(folded))
        } else {
            Err(EmailError::InvalidFormat(email))
        }
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// Partial profile update.
///
/// Only fields carrying a value are written; `apply` is the single merge
/// point so nothing outside it mutates profile fields from a patch.
#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl ProfilePatch {
    /// Merge the provided fields into an account, leaving the rest untouched.
    pub fn apply(self, account: &mut Account) {
        if let Some(full_name) = self.full_name {
            account.full_name = Some(full_name);
        }
        if let Some(phone) = self.phone {
            account.phone = Some(phone);
        }
        if let Some(bio) = self.bio {
            account.bio = Some(bio);
        }
    }
}

/// Outcome of a successful login, registration, or refresh.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub account: Account,
    pub tokens: TokenPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_case_folded() {
        let email = EmailAddress::new("Alice@Example.COM".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_email_rejects_bad_shape() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("a@b".to_string()).is_err());
    }

    #[test]
    fn test_account_id_round_trip() {
        let id = AccountId::new();
        let parsed = AccountId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_account_id_rejects_garbage() {
        assert!(matches!(
            AccountId::from_string("not-a-uuid"),
            Err(AccountIdError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_profile_patch_merges_only_provided_fields() {
        let mut account = Account {
            id: AccountId::new(),
            email: EmailAddress::new("a@b.com".to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
            full_name: Some("Old Name".to_string()),
            phone: Some("+5511912345678".to_string()),
            bio: None,
            is_active: true,
            created_at: Utc::now(),
        };

        let patch = ProfilePatch {
            full_name: Some("New Name".to_string()),
            phone: None,
            bio: Some("Seller of things".to_string()),
        };
        patch.apply(&mut account);

        assert_eq!(account.full_name.as_deref(), Some("New Name"));
        assert_eq!(account.phone.as_deref(), Some("+5511912345678"));
        assert_eq!(account.bio.as_deref(), Some("Seller of things"));
    }
}
