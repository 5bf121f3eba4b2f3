pub mod claims;
pub mod codec;
pub mod errors;
pub mod pair;

pub use claims::TokenClaims;
pub use claims::TokenKind;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use pair::TokenPair;
