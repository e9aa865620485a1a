//! Authentication tests - fault classification, credential checks and password hashing.
//!
//! - `authenticate` against a scripted provider (no database)
//! - argon2 hashing and verification
//! - `CredentialsProvider` against Postgres (`#[sqlx::test]`, needs DATABASE_URL)

mod common;

use common::*;
use sqlx::PgPool;

use invoice_actions::actions::authenticate::{
    AuthOutcome, INVALID_CREDENTIALS, SIGN_IN_FAILURE, authenticate,
};
use invoice_actions::auth::password;
use invoice_actions::auth::provider::{
    AuthFaultKind, AuthProvider, CREDENTIALS_PROVIDER, CredentialsProvider, SignInError,
    check_credentials,
};
use invoice_actions::errors::AppError;
use invoice_actions::models::user::{self, NewUser};

const TEST_EMAIL: &str = "user@example.com";
const TEST_PASSWORD: &str = "password123";

// ---------------------------------------------------------------------------
// Fault classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_bad_credentials_return_invalid_credentials() {
    let provider = ScriptedProvider::new(Script::Fault(AuthFaultKind::CredentialsSignin));

    let outcome = authenticate(&provider, None, &credentials(TEST_EMAIL, "nope")).await.expect("no error");

    assert_eq!(outcome, AuthOutcome::Rejected(INVALID_CREDENTIALS));
    assert_eq!(outcome.message(), Some("Invalid credentials."));
}

#[tokio::test]
async fn test_other_auth_faults_return_generic_message() {
    for kind in [AuthFaultKind::Configuration, AuthFaultKind::AccessDenied] {
        let provider = ScriptedProvider::new(Script::Fault(kind));

        let outcome = authenticate(&provider, Some("previous"), &credentials(TEST_EMAIL, TEST_PASSWORD))
            .await
            .expect("no error");

        assert_eq!(outcome.message(), Some(SIGN_IN_FAILURE), "kind {kind:?}");
        assert_eq!(outcome.message(), Some("Something went wrong."));
    }
}

#[tokio::test]
async fn test_non_auth_failure_propagates() {
    let provider = ScriptedProvider::new(Script::DatabaseDown);

    let result = authenticate(&provider, None, &credentials(TEST_EMAIL, TEST_PASSWORD)).await;

    assert!(matches!(result, Err(AppError::Db(sqlx::Error::PoolTimedOut))));
}

#[tokio::test]
async fn test_success_returns_session_and_uses_credentials_provider() {
    let provider = ScriptedProvider::new(Script::Succeed);

    let outcome = authenticate(&provider, None, &credentials(TEST_EMAIL, TEST_PASSWORD)).await.expect("no error");

    match outcome {
        AuthOutcome::SignedIn(session) => assert_eq!(session.email, TEST_EMAIL),
        other => panic!("expected sign-in, got {other:?}"),
    }
    assert_eq!(provider.seen_provider().as_deref(), Some(CREDENTIALS_PROVIDER));
}

// ---------------------------------------------------------------------------
// Credential shape and password hashing
// ---------------------------------------------------------------------------

#[test]
fn test_check_credentials_rejects_malformed_input() {
    for (email, pw) in [("", TEST_PASSWORD), ("no-at-sign", TEST_PASSWORD), ("a@nodot", TEST_PASSWORD), (TEST_EMAIL, "short")] {
        let fault = check_credentials(&credentials(email, pw)).unwrap_err();
        assert_eq!(fault.kind, AuthFaultKind::CredentialsSignin, "{email:?} / {pw:?}");
    }
    assert!(check_credentials(&credentials(TEST_EMAIL, TEST_PASSWORD)).is_ok());
}

#[test]
fn test_password_length_counts_characters() {
    // 5 characters, 10 bytes
    let fault = check_credentials(&credentials(TEST_EMAIL, "ééééé")).unwrap_err();
    assert_eq!(fault.kind, AuthFaultKind::CredentialsSignin);
    assert!(check_credentials(&credentials(TEST_EMAIL, "éééééé")).is_ok());
}

#[test]
fn test_verify_password_correct_and_incorrect() {
    let hash = password::hash_password(TEST_PASSWORD).expect("Failed to hash password");

    assert!(password::verify_password(TEST_PASSWORD, &hash).expect("Verification failed"));
    assert!(!password::verify_password("wrongpassword", &hash).expect("Verification failed"));
}

#[test]
fn test_hash_password_randomness() {
    let hash1 = password::hash_password(TEST_PASSWORD).expect("Failed to hash first password");
    let hash2 = password::hash_password(TEST_PASSWORD).expect("Failed to hash second password");

    // Same password, different salts
    assert_ne!(hash1, hash2);
}

#[test]
fn test_verify_password_with_garbage_hash_is_an_error() {
    assert!(password::verify_password(TEST_PASSWORD, "not-a-phc-string").is_err());
}

// ---------------------------------------------------------------------------
// CredentialsProvider against Postgres
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, email: &str, stored_password: String) {
    let new = NewUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: stored_password,
    };
    user::create(pool, &new).await.expect("create user");
}

#[sqlx::test]
async fn test_provider_signs_in_with_correct_password(pool: PgPool) {
    seed_user(&pool, TEST_EMAIL, password::hash_password(TEST_PASSWORD).unwrap()).await;
    let provider = CredentialsProvider::new(pool);

    let outcome = authenticate(&provider, None, &credentials(TEST_EMAIL, TEST_PASSWORD)).await.expect("no error");

    match outcome {
        AuthOutcome::SignedIn(session) => {
            assert_eq!(session.email, TEST_EMAIL);
            assert_eq!(session.name, "Test User");
            assert!(!session.user_id.is_empty());
        }
        other => panic!("expected sign-in, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_provider_wrong_password_and_unknown_email_are_bad_credentials(pool: PgPool) {
    seed_user(&pool, TEST_EMAIL, password::hash_password(TEST_PASSWORD).unwrap()).await;
    let provider = CredentialsProvider::new(pool);

    for creds in [credentials(TEST_EMAIL, "wrongpassword"), credentials("other@example.com", TEST_PASSWORD)] {
        let outcome = authenticate(&provider, None, &creds).await.expect("no error");
        assert_eq!(outcome, AuthOutcome::Rejected(INVALID_CREDENTIALS));
    }
}

#[sqlx::test]
async fn test_provider_unreadable_hash_is_a_configuration_fault(pool: PgPool) {
    seed_user(&pool, TEST_EMAIL, "plaintext-oops".to_string()).await;
    let provider = CredentialsProvider::new(pool);

    match provider.sign_in(CREDENTIALS_PROVIDER, &credentials(TEST_EMAIL, TEST_PASSWORD)).await {
        Err(SignInError::Auth(fault)) => assert_eq!(fault.kind, AuthFaultKind::Configuration),
        other => panic!("expected configuration fault, got {other:?}"),
    }

    let outcome = authenticate(&provider, None, &credentials(TEST_EMAIL, TEST_PASSWORD)).await.expect("no error");
    assert_eq!(outcome, AuthOutcome::Rejected(SIGN_IN_FAILURE));
}

#[sqlx::test]
async fn test_provider_rejects_unknown_provider_name(pool: PgPool) {
    let provider = CredentialsProvider::new(pool);

    match provider.sign_in("github", &credentials(TEST_EMAIL, TEST_PASSWORD)).await {
        Err(SignInError::Auth(fault)) => assert_eq!(fault.kind, AuthFaultKind::Configuration),
        other => panic!("expected configuration fault, got {other:?}"),
    }
}
