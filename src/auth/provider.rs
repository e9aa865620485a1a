//! Sign-in providers.
//!
//! A provider turns submitted credentials into an [`AuthSession`]. Failures it
//! understands come back as an [`AuthFault`] with a kind the login form can
//! translate; anything else is an [`AppError`] the caller should not swallow.

use std::fmt;
use std::future::Future;

use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::user;

pub const CREDENTIALS_PROVIDER: &str = "credentials";
const MIN_PASSWORD_LEN: usize = 6;

/// Login form fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Identity established by a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFaultKind {
    /// Unknown user, wrong password, or malformed credentials.
    CredentialsSignin,
    /// Provider is misconfigured or unknown.
    Configuration,
    AccessDenied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFault {
    pub kind: AuthFaultKind,
    pub detail: String,
}

impl AuthFault {
    pub fn new(kind: AuthFaultKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }
}

impl fmt::Display for AuthFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.detail)
    }
}

#[derive(Debug)]
pub enum SignInError {
    Auth(AuthFault),
    Other(AppError),
}

impl From<AuthFault> for SignInError {
    fn from(fault: AuthFault) -> Self {
        SignInError::Auth(fault)
    }
}

impl From<AppError> for SignInError {
    fn from(e: AppError) -> Self {
        SignInError::Other(e)
    }
}

pub trait AuthProvider {
    fn sign_in(
        &self,
        provider: &str,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthSession, SignInError>>;
}

/// Email + password provider backed by the `users` table.
#[derive(Clone)]
pub struct CredentialsProvider {
    pool: PgPool,
}

impl CredentialsProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Shape check before any lookup.
pub fn check_credentials(credentials: &Credentials) -> Result<(), AuthFault> {
    let email = credentials.email.trim();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !well_formed {
        return Err(AuthFault::new(AuthFaultKind::CredentialsSignin, "malformed email"));
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthFault::new(AuthFaultKind::CredentialsSignin, "password too short"));
    }
    Ok(())
}

impl AuthProvider for CredentialsProvider {
    async fn sign_in(&self, provider: &str, credentials: &Credentials) -> Result<AuthSession, SignInError> {
        if provider != CREDENTIALS_PROVIDER {
            return Err(AuthFault::new(AuthFaultKind::Configuration, format!("unknown provider '{provider}'")).into());
        }
        check_credentials(credentials)?;

        let found = user::find_by_email(&self.pool, credentials.email.trim())
            .await
            .map_err(AppError::from)?;

        let Some(u) = found else {
            return Err(AuthFault::new(AuthFaultKind::CredentialsSignin, "unknown email").into());
        };

        match password::verify_password(&credentials.password, &u.password) {
            Ok(true) => Ok(AuthSession { user_id: u.id, name: u.name, email: u.email }),
            Ok(false) => Err(AuthFault::new(AuthFaultKind::CredentialsSignin, "wrong password").into()),
            Err(e) => {
                log::error!("Stored password hash for user {} is unreadable: {e}", u.id);
                Err(AuthFault::new(AuthFaultKind::Configuration, "unreadable password hash").into())
            }
        }
    }
}
