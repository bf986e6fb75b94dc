//! Root login flow.

use std::sync::Arc;

use tracing::{info, warn};

use botgate_core::error::AuthError;
use botgate_core::result::AuthResult;
use botgate_core::traits::credential::CredentialProvider;
use botgate_core::types::pairing::PairingSnapshot;

use crate::token::issuer::TokenIssuer;

use super::TokenOutcome;

/// Fixed denial reasons. Credential failures use a single reason for both
/// wrong-user and wrong-password, and the throttle reason carries no
/// remaining-attempt or reset-time detail.
const REASON_ROOT_LOGIN_DISABLED: &str = "Root login is disabled while paired to the cloud";
const REASON_THROTTLED: &str = "Too many login attempts, try again later";
const REASON_BAD_CREDENTIALS: &str = "Invalid username or password";

/// Orchestrates throttle check, credential check, and token issuance.
pub struct LoginFlow {
    /// Credential collaborator.
    credentials: Arc<dyn CredentialProvider>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Pairing state captured at construction.
    pairing: PairingSnapshot,
}

impl LoginFlow {
    /// Creates a new login flow.
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        issuer: Arc<TokenIssuer>,
        pairing: PairingSnapshot,
    ) -> Self {
        Self {
            credentials,
            issuer,
            pairing,
        }
    }

    /// Performs the root login flow:
    ///
    /// 1. Short-circuit when paired: identity is delegated and no
    ///    collaborator is consulted.
    /// 2. Throttle gate for the caller's address.
    /// 3. Credential check, then token issuance.
    ///
    /// Never returns an error; every failure maps to a denial reason.
    pub async fn login(&self, username: &str, password: &str, ip: &str) -> TokenOutcome {
        match self.attempt(username, password, ip).await {
            Ok(token) => {
                info!(username, ip, "Root login granted");
                TokenOutcome::Granted { token }
            }
            Err(e) => {
                warn!(username, ip, kind = %e.kind, "Root login denied");
                TokenOutcome::Denied { reason: e.message }
            }
        }
    }

    /// Result-typed login attempt backing [`Self::login`].
    async fn attempt(&self, username: &str, password: &str, ip: &str) -> AuthResult<String> {
        if self.pairing.paired {
            return Err(AuthError::root_login_disabled(REASON_ROOT_LOGIN_DISABLED));
        }

        if !self.credentials.attempt_allowed(ip).await? {
            return Err(AuthError::throttled(REASON_THROTTLED));
        }

        let principal = self
            .credentials
            .authenticate(username, password, ip)
            .await?
            .ok_or_else(|| AuthError::bad_credentials(REASON_BAD_CREDENTIALS))?;

        self.issuer.build_token(&principal).await
    }
}
