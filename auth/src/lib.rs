//! Authentication and credential core library
//!
//! Provides the credential primitives shared by the account service:
//! - Password hashing and verification (Argon2id)
//! - Password strength and email format policy checks
//! - Signed, expiring access/refresh token issuance and verification
//! - Reversible obscuring of stored contact fields (NOT encryption)
//!
//! Every component here is synchronous and free of I/O: credential lookups
//! and persistence belong to the calling service. Configuration (signing
//! secret, token lifetimes) is fixed at construction and immutable afterward,
//! so concurrent use from multiple request handlers needs no synchronization.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Correct-horse9!").unwrap();
//! assert!(hasher.verify("Correct-horse9!", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Token Issuance and Verification
//! ```
//! use auth::{TokenCodec, TokenKind};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(30),
//!     Duration::days(7),
//! );
//! let pair = codec.issue_pair("account-123", Some("alice@example.com")).unwrap();
//! let claims = codec.decode(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "account-123");
//! assert_eq!(claims.kind, TokenKind::Access);
//! ```
//!
//! ## Contact Field Obscuring
//! ```
//! use auth::ReversibleEncoder;
//!
//! let encoder = ReversibleEncoder::new();
//! let obscured = encoder.encode("vendor@example.com");
//! assert_eq!(encoder.decode(&obscured).unwrap(), "vendor@example.com");
//! ```

pub mod obscure;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use obscure::ObscureError;
pub use obscure::ReversibleEncoder;
pub use password::validate_email_format;
pub use password::validate_strength;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenKind;
pub use token::TokenPair;
