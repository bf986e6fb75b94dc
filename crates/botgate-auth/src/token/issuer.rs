//! Session token creation.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Header, encode};

use botgate_core::config::auth::AuthConfig;
use botgate_core::error::AuthError;
use botgate_core::result::AuthResult;
use botgate_core::types::principal::Principal;

use super::claims::{SessionClaims, TOKEN_ISSUER};
use super::signing::SigningContext;

/// Creates signed session tokens for locally authenticated principals.
pub struct TokenIssuer {
    /// Signing material resolution.
    signing: Arc<SigningContext>,
    /// Session token TTL in minutes.
    token_ttl_minutes: i64,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(signing: Arc<SigningContext>, config: &AuthConfig) -> Self {
        Self {
            signing,
            token_ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Signs a session token for the given principal.
    ///
    /// Issued tokens use the symmetric secret and are always verifiable
    /// under the unpaired verification path. No audience claim is emitted;
    /// the verifier only requires one when a bot identifier is bound.
    pub async fn build_token(&self, principal: &Principal) -> AuthResult<String> {
        let material = self.signing.signing_material().await?;

        let exp = Utc::now() + chrono::Duration::minutes(self.token_ttl_minutes);
        let claims = SessionClaims {
            user: principal.clone(),
            iss: TOKEN_ISSUER.to_string(),
            aud: None,
            exp: exp.timestamp(),
            identity_proof_only: None,
        };

        encode(
            &Header::new(material.algorithm()),
            &claims,
            &material.encoding_key()?,
        )
        .map_err(|e| AuthError::internal(format!("Failed to encode session token: {e}")))
    }
}
