//! Session token verification.

use std::sync::Arc;

use jsonwebtoken::{Validation, decode};

use botgate_core::error::AuthError;
use botgate_core::result::AuthResult;
use botgate_core::traits::credential::CredentialProvider;
use botgate_core::types::principal::Principal;

use super::claims::SessionClaims;
use super::signing::SigningContext;

/// The only accepted authorization scheme, compared case-sensitively.
const BEARER_SCHEME: &str = "Bearer";

/// Splits an authorization header into scheme and token, requiring the
/// exact `Bearer` scheme. Runs before any collaborator I/O so a malformed
/// header never triggers a secret or certificate fetch.
pub(crate) fn split_bearer(header: &str) -> AuthResult<&str> {
    let (scheme, token) = header
        .split_once(' ')
        .ok_or_else(|| AuthError::scheme("Malformed authorization header"))?;

    if scheme != BEARER_SCHEME {
        return Err(AuthError::scheme("Unsupported authorization scheme"));
    }

    Ok(token)
}

/// Validates presented session tokens.
///
/// One internal verification algorithm backs three call styles: a strict
/// variant that surfaces the failure cause, a lenient variant that
/// collapses every failure to `None`, and a raw-token variant that admits
/// identity-proof tokens.
pub struct TokenVerifier {
    /// Signing material resolution.
    signing: Arc<SigningContext>,
    /// Credential collaborator providing the optional verification hook.
    credentials: Arc<dyn CredentialProvider>,
}

impl TokenVerifier {
    /// Creates a new verifier over the given signing context.
    pub fn new(signing: Arc<SigningContext>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            signing,
            credentials,
        }
    }

    /// Strict variant: verifies an authorization header and surfaces the
    /// failure cause as an error.
    pub async fn authenticate_with_error(&self, header: &str) -> AuthResult<Principal> {
        let token = split_bearer(header)?;
        self.verify_token(token, true).await
    }

    /// Lenient variant: same checks as [`Self::authenticate_with_error`],
    /// but every failure collapses to `None`.
    pub async fn authenticate(&self, header: &str) -> Option<Principal> {
        self.authenticate_with_error(header).await.ok()
    }

    /// Extracts the identity from a raw token (no header scheme).
    ///
    /// Performs the same signature and audience checks as the session
    /// variants but admits identity-proof tokens. Never errors.
    pub async fn user_identity(&self, token: &str) -> Option<Principal> {
        self.verify_token(token, false).await.ok()
    }

    /// Shared verification algorithm.
    ///
    /// Checks in order: signature and expiry under the one algorithm the
    /// current pairing state implies, the collaborator's identity hook,
    /// the proof-only restriction (session use only), and the audience.
    async fn verify_token(&self, token: &str, session_use: bool) -> AuthResult<Principal> {
        let material = self.signing.verification_material().await?;

        let mut validation = Validation::new(material.algorithm());
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        let token_data = decode::<SessionClaims>(token, &material.decoding_key()?, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AuthError::token_invalid("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AuthError::token_invalid("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AuthError::token_invalid("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                    AuthError::token_invalid("Token algorithm not allowed")
                }
                _ => AuthError::token_invalid(format!("Token validation failed: {e}")),
            })?;
        let claims = token_data.claims;

        let verified = self
            .credentials
            .verify_user(&serde_json::to_value(&claims)?)
            .await?;
        if !verified {
            return Err(AuthError::token_invalid("Identity verification failed"));
        }

        if session_use && claims.is_proof_only() {
            return Err(AuthError::token_invalid(
                "Identity-proof token is not valid for a session",
            ));
        }

        if let Some(expected) = self.signing.pairing().audience() {
            if claims.aud.as_deref() != Some(expected.as_str()) {
                return Err(AuthError::token_invalid("Token audience mismatch"));
            }
        }

        Ok(claims.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgate_core::error::ErrorKind;

    #[test]
    fn test_split_bearer_accepts_exact_scheme() {
        assert_eq!(split_bearer("Bearer abc").expect("token"), "abc");
    }

    #[test]
    fn test_split_bearer_is_case_sensitive() {
        let err = split_bearer("bearer abc").expect_err("scheme must match exactly");
        assert_eq!(err.kind, ErrorKind::Scheme);
    }

    #[test]
    fn test_split_bearer_requires_space() {
        let err = split_bearer("Bearerabc").expect_err("missing separator");
        assert_eq!(err.kind, ErrorKind::Scheme);
    }
}
