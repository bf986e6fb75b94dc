//! Facade wiring the token lifecycle components together.

use std::sync::Arc;

use botgate_core::config::auth::AuthConfig;
use botgate_core::result::AuthResult;
use botgate_core::traits::cloud::CloudProvider;
use botgate_core::traits::credential::CredentialProvider;
use botgate_core::types::pairing::PairingSnapshot;
use botgate_core::types::principal::Principal;

use crate::flow::{AuthInfoProvider, AuthenticationInfo, LoginFlow, RefreshFlow, TokenOutcome};
use crate::token::issuer::TokenIssuer;
use crate::token::signing::SigningContext;
use crate::token::verifier::TokenVerifier;

/// The assembled session token core.
///
/// Captures the pairing snapshot exactly once at construction; a pairing
/// change requires constructing a new service. All components share the
/// same snapshot and collaborators.
pub struct AuthService {
    /// Login orchestration.
    login: LoginFlow,
    /// Refresh orchestration.
    refresh: RefreshFlow,
    /// Token verification.
    verifier: Arc<TokenVerifier>,
    /// Trust-mode metadata.
    info: AuthInfoProvider,
}

impl AuthService {
    /// Wires the token core from configuration and collaborators.
    pub fn new(
        config: &AuthConfig,
        credentials: Arc<dyn CredentialProvider>,
        cloud: Arc<dyn CloudProvider>,
    ) -> Self {
        let pairing = PairingSnapshot::capture(cloud.as_ref());

        let signing = Arc::new(SigningContext::new(
            credentials.clone(),
            cloud,
            pairing.clone(),
        ));
        let issuer = Arc::new(TokenIssuer::new(signing.clone(), config));
        let verifier = Arc::new(TokenVerifier::new(signing, credentials.clone()));

        Self {
            login: LoginFlow::new(credentials, issuer.clone(), pairing.clone()),
            refresh: RefreshFlow::new(verifier.clone(), issuer, config),
            verifier,
            info: AuthInfoProvider::new(pairing, config),
        }
    }

    /// Attempts a root login. See [`LoginFlow::login`].
    pub async fn login(&self, username: &str, password: &str, ip: &str) -> TokenOutcome {
        self.login.login(username, password, ip).await
    }

    /// Refreshes a presented token. See [`RefreshFlow::refresh_token`].
    pub async fn refresh_token(&self, header: &str) -> TokenOutcome {
        self.refresh.refresh_token(header).await
    }

    /// Verifies an authorization header, collapsing failures to `None`.
    pub async fn authenticate(&self, header: &str) -> Option<Principal> {
        self.verifier.authenticate(header).await
    }

    /// Verifies an authorization header, surfacing the failure cause.
    pub async fn authenticate_with_error(&self, header: &str) -> AuthResult<Principal> {
        self.verifier.authenticate_with_error(header).await
    }

    /// Extracts the identity from a raw token, admitting proof-only tokens.
    pub async fn user_identity(&self, token: &str) -> Option<Principal> {
        self.verifier.user_identity(token).await
    }

    /// Returns read-only trust-mode metadata.
    pub fn authentication_info(&self) -> AuthenticationInfo {
        self.info.info()
    }
}
