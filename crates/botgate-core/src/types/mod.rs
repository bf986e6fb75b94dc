//! Shared value types.

pub mod pairing;
pub mod principal;

pub use pairing::PairingSnapshot;
pub use principal::Principal;
