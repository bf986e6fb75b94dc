//! Integration tests for the token refresh flow.

mod helpers;

use std::sync::Arc;

use botgate_core::config::auth::AuthConfig;
use botgate_core::types::principal::Principal;

use helpers::{MockCloud, MockCredentials, TEST_SECRET, bearer, claims, mint_hs256, service};

fn login_disabled_config() -> AuthConfig {
    AuthConfig {
        login_enabled: false,
        ..AuthConfig::default()
    }
}

#[tokio::test]
async fn test_passthrough_echoes_token_when_login_disabled() {
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&login_disabled_config(), credentials, MockCloud::unpaired());

    // No cryptographic re-verification in passthrough mode: even an
    // unverifiable token comes back unchanged.
    let outcome = gate.refresh_token("Bearer abc.def.ghi").await;
    assert_eq!(outcome.token(), Some("abc.def.ghi"));

    let expired = mint_hs256(TEST_SECRET, &claims("admin", -600));
    let outcome = gate.refresh_token(&bearer(&expired)).await;
    assert_eq!(outcome.token(), Some(expired.as_str()));
}

#[tokio::test]
async fn test_passthrough_still_requires_bearer_scheme() {
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&login_disabled_config(), credentials, MockCloud::unpaired());

    let outcome = gate.refresh_token("Token abc.def.ghi").await;
    assert!(!outcome.is_granted());

    let outcome = gate.refresh_token("abc.def.ghi").await;
    assert!(!outcome.is_granted());
}

#[tokio::test]
async fn test_refresh_issues_fresh_token_for_same_principal() {
    let config = AuthConfig::default();
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&config, credentials, MockCloud::unpaired());

    let token = mint_hs256(TEST_SECRET, &claims("admin", 600));
    let outcome = gate.refresh_token(&bearer(&token)).await;

    let fresh = outcome.token().expect("refresh should grant a token");
    assert_eq!(
        gate.authenticate(&bearer(fresh)).await,
        Some(Principal::from("admin"))
    );
}

#[tokio::test]
async fn test_refresh_rejected_token_carries_reason() {
    let config = AuthConfig::default();
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&config, credentials, MockCloud::unpaired());

    let outcome = gate.refresh_token("Bearer not-a-token").await;
    assert!(!outcome.reason().expect("denied").is_empty());

    let expired = mint_hs256(TEST_SECRET, &claims("admin", -600));
    let outcome = gate.refresh_token(&bearer(&expired)).await;
    assert!(!outcome.reason().expect("denied").is_empty());
}

#[tokio::test]
async fn test_refresh_with_wrong_scheme_denied_when_login_enabled() {
    let config = AuthConfig::default();
    let credentials = Arc::new(MockCredentials::new(TEST_SECRET));
    let gate = service(&config, credentials, MockCloud::unpaired());

    let token = mint_hs256(TEST_SECRET, &claims("admin", 600));
    let outcome = gate.refresh_token(&format!("bearer {token}")).await;
    assert!(!outcome.is_granted());
}
