//! Credential collaborator trait.

use async_trait::async_trait;

use crate::result::AuthResult;
use crate::types::principal::Principal;

/// Boundary to the credential subsystem: secret storage, password
/// checking, and per-IP attempt counting.
///
/// The token core treats this as an opaque collaborator. Secret rotation,
/// hash algorithms, and throttle bookkeeping all live behind this trait.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Fetch the current symmetric token secret.
    ///
    /// Called fresh on every sign/verify so that an out-of-band rotation
    /// takes effect immediately. May fail on storage errors.
    async fn token_secret(&self) -> AuthResult<Vec<u8>>;

    /// Whether another login attempt from this address is permitted.
    async fn attempt_allowed(&self, ip: &str) -> AuthResult<bool>;

    /// Check a username/password pair, returning the principal on success
    /// and `None` on any credential mismatch.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
        ip: &str,
    ) -> AuthResult<Option<Principal>>;

    /// Optional post-decode identity verification hook.
    ///
    /// Receives the decoded token claims. Implementations that do not
    /// expose this capability inherit the default, which accepts.
    async fn verify_user(&self, _claims: &serde_json::Value) -> AuthResult<bool> {
        Ok(true)
    }
}
