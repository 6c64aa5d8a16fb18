pub mod claims;
pub mod codec;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use claims::TokenKind;
pub use claims::TokenSubject;
pub use codec::TokenCodec;
pub use codec::TokenCodecConfig;
pub use codec::REFRESH_TOKEN_LIFETIME_HOURS;
pub use errors::JwtError;
pub use handler::JwtHandler;
