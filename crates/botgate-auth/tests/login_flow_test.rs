//! Integration tests for the root login flow.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use botgate_core::config::auth::AuthConfig;
use botgate_core::types::principal::Principal;

use helpers::{MockCloud, MockCredentials, TEST_SECRET, bearer, service};

#[tokio::test]
async fn test_login_success_roundtrip() {
    let config = AuthConfig::default();
    let credentials = Arc::new(
        MockCredentials::new(TEST_SECRET).with_accepted("admin", "pw", "1.2.3.4"),
    );
    let gate = service(&config, credentials, MockCloud::unpaired());

    let outcome = gate.login("admin", "pw", "1.2.3.4").await;
    let token = outcome.token().expect("login should grant a token");

    let principal = gate.authenticate(&bearer(token)).await;
    assert_eq!(principal, Some(Principal::from("admin")));
}

#[tokio::test]
async fn test_wrong_user_and_wrong_password_are_indistinguishable() {
    let config = AuthConfig::default();
    let credentials = Arc::new(
        MockCredentials::new(TEST_SECRET).with_accepted("admin", "pw", "1.2.3.4"),
    );
    let gate = service(&config, credentials, MockCloud::unpaired());

    let bad_password = gate.login("admin", "wrong", "1.2.3.4").await;
    let bad_user = gate.login("nobody", "pw", "1.2.3.4").await;

    let reason_a = bad_password.reason().expect("denied");
    let reason_b = bad_user.reason().expect("denied");
    assert_eq!(reason_a, reason_b);
}

#[tokio::test]
async fn test_throttled_login_uses_generic_reason() {
    let config = AuthConfig::default();
    let credentials = Arc::new(
        MockCredentials::new(TEST_SECRET)
            .with_accepted("admin", "pw", "1.2.3.4")
            .with_throttled_ip("1.2.3.4"),
    );
    let gate = service(&config, credentials.clone(), MockCloud::unpaired());

    let outcome = gate.login("admin", "pw", "1.2.3.4").await;

    let reason = outcome.reason().expect("denied");
    assert!(reason.contains("attempts"));
    // Throttled requests never reach the credential check.
    assert_eq!(credentials.authenticate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_login_denied_while_paired_without_collaborator_calls() {
    let config = AuthConfig::default();
    let credentials = Arc::new(
        MockCredentials::new(TEST_SECRET).with_accepted("admin", "pw", "1.2.3.4"),
    );
    let gate = service(&config, credentials.clone(), MockCloud::paired("support-bot"));

    let outcome = gate.login("admin", "pw", "1.2.3.4").await;

    let reason = outcome.reason().expect("denied");
    assert!(reason.contains("Root login is disabled"));
    assert_eq!(credentials.attempt_calls.load(Ordering::SeqCst), 0);
    assert_eq!(credentials.authenticate_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_secret_storage_failure_collapses_to_denial() {
    let config = AuthConfig::default();
    let credentials = Arc::new(
        MockCredentials::new(TEST_SECRET)
            .with_accepted("admin", "pw", "1.2.3.4")
            .with_failing_secret(),
    );
    let gate = service(&config, credentials, MockCloud::unpaired());

    let outcome = gate.login("admin", "pw", "1.2.3.4").await;

    assert!(!outcome.is_granted());
    assert!(!outcome.reason().expect("denied").is_empty());
}
