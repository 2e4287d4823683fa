pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use errors::TokenError;

pub use jsonwebtoken::Algorithm;
