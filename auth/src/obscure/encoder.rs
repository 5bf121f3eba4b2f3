use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::errors::ObscureError;

/// Reversible, keyless obscuring of stored contact fields (email, phone).
///
/// This is NOT encryption and must never be treated as a security control:
/// the transform is standard base64 with no secret, and anyone holding an
/// obscured value can recover the plaintext. It only keeps contact fields
/// from being readable at a glance in the vendor-contact store.
///
/// Encoding is deterministic, so equality lookups encode the probe value and
/// compare obscured-to-obscured; stored values are never decoded for search.
pub struct ReversibleEncoder;

impl ReversibleEncoder {
    /// Create a new encoder instance.
    pub fn new() -> Self {
        Self
    }

    /// Obscure a plaintext field for storage.
    pub fn encode(&self, plaintext: &str) -> String {
        STANDARD.encode(plaintext.as_bytes())
    }

    /// Recover the plaintext of an obscured field.
    ///
    /// # Errors
    /// * `InvalidEncoding` - Value is not valid base64
    /// * `InvalidUtf8` - Decoded bytes are not valid UTF-8
    pub fn decode(&self, obscured: &str) -> Result<String, ObscureError> {
        let bytes = STANDARD
            .decode(obscured)
            .map_err(|e| ObscureError::InvalidEncoding(e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| ObscureError::InvalidUtf8(e.to_string()))
    }
}

impl Default for ReversibleEncoder {
    fn default() -> Self {
        Self::new()
    }
}
