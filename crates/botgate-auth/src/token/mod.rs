//! Token claims, signing material selection, and the issue/verify pair.

pub mod claims;
pub mod issuer;
pub mod signing;
pub mod verifier;

pub use claims::SessionClaims;
pub use issuer::TokenIssuer;
pub use signing::{SigningContext, SigningMaterial};
pub use verifier::TokenVerifier;
