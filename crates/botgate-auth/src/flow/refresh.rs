//! Token refresh flow.

use std::sync::Arc;

use tracing::{error, info, warn};

use botgate_core::config::auth::AuthConfig;

use crate::token::issuer::TokenIssuer;
use crate::token::verifier::{TokenVerifier, split_bearer};

use super::TokenOutcome;

/// Fallback reason when a verification failure carries no message.
const REASON_REFRESH_FAILED: &str = "Token refresh failed";

/// Re-validates a presented token and issues a replacement.
pub struct RefreshFlow {
    /// Token verifier.
    verifier: Arc<TokenVerifier>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Whether login is enabled at all; when false, refresh degrades to
    /// a scheme-checked passthrough.
    login_enabled: bool,
}

impl RefreshFlow {
    /// Creates a new refresh flow from auth configuration.
    pub fn new(verifier: Arc<TokenVerifier>, issuer: Arc<TokenIssuer>, config: &AuthConfig) -> Self {
        Self {
            verifier,
            issuer,
            login_enabled: config.login_enabled,
        }
    }

    /// Refreshes the token carried in an authorization header.
    ///
    /// With login disabled the presented token is echoed back after a
    /// scheme-prefix check only, with no cryptographic re-verification.
    /// Otherwise the token is strictly verified and a fresh token is
    /// issued for the same principal. Never returns an error.
    pub async fn refresh_token(&self, header: &str) -> TokenOutcome {
        if !self.login_enabled {
            return match split_bearer(header) {
                Ok(token) => TokenOutcome::Granted {
                    token: token.to_string(),
                },
                Err(e) => TokenOutcome::Denied { reason: e.message },
            };
        }

        let principal = match self.verifier.authenticate_with_error(header).await {
            Ok(principal) => principal,
            Err(e) => {
                warn!(kind = %e.kind, "Token refresh rejected");
                let reason = if e.message.is_empty() {
                    REASON_REFRESH_FAILED.to_string()
                } else {
                    e.message
                };
                return TokenOutcome::Denied { reason };
            }
        };

        match self.issuer.build_token(&principal).await {
            Ok(token) => {
                info!(user = %principal, "Session token refreshed");
                TokenOutcome::Granted { token }
            }
            Err(e) => {
                error!(kind = %e.kind, "Failed to issue replacement token");
                TokenOutcome::Denied { reason: e.message }
            }
        }
    }
}
