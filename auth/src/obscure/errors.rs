use thiserror::Error;

/// Error type for obscured-field decoding.
#[derive(Debug, Clone, Error)]
pub enum ObscureError {
    #[error("Value is not a valid obscured encoding: {0}")]
    InvalidEncoding(String),

    #[error("Decoded value is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}
