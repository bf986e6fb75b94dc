//! Collaborator traits defined in `botgate-core` and implemented by the
//! embedding application.

pub mod cloud;
pub mod credential;

pub use cloud::{CloudProvider, PairingInfo};
pub use credential::CredentialProvider;
