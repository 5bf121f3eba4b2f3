//! Pure policy predicates over candidate credentials.
//!
//! No partial credit: a candidate either satisfies every requirement of a
//! check or fails it outright.

/// Characters that satisfy the special-character requirement.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Check whether a password is strong enough to store.
///
/// Requires length >= 8 plus at least one uppercase letter, one lowercase
/// letter, one digit, and one character from [`SPECIAL_CHARS`].
pub fn validate_strength(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    has_upper && has_lower && has_digit && has_special
}

/// Check whether a candidate string has `local@domain.tld` shape.
///
/// Syntactic only, no DNS/MX lookup: ASCII local part over
/// `[A-Za-z0-9._%+-]`, domain over `[A-Za-z0-9.-]` with at least one dot,
/// and a final label of two or more ASCII letters.
pub fn validate_email_format(candidate: &str) -> bool {
    if !candidate.is_ascii() {
        return false;
    }

    let (local, domain) = match candidate.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || !local.bytes().all(is_local_char) {
        return false;
    }

    let (host, tld) = match domain.rsplit_once('.') {
        Some(parts) => parts,
        None => return false,
    };

    if host.is_empty() || !host.bytes().all(is_domain_char) {
        return false;
    }

    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_local_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'%' | b'+' | b'-')
}

fn is_domain_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-')
}
