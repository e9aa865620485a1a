use crate::auth::provider::{AuthFaultKind, AuthProvider, AuthSession, CREDENTIALS_PROVIDER, Credentials, SignInError};
use crate::errors::AppError;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const SIGN_IN_FAILURE: &str = "Something went wrong.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    SignedIn(AuthSession),
    /// Message to show on the login form.
    Rejected(&'static str),
}

impl AuthOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            AuthOutcome::SignedIn(_) => None,
            AuthOutcome::Rejected(msg) => Some(*msg),
        }
    }
}

/// Sign in through the credentials provider. Classified auth faults become a
/// form message; every other failure is returned as an error.
pub async fn authenticate<P: AuthProvider>(
    provider: &P,
    _prev_state: Option<&str>,
    credentials: &Credentials,
) -> Result<AuthOutcome, AppError> {
    match provider.sign_in(CREDENTIALS_PROVIDER, credentials).await {
        Ok(session) => {
            log::info!("User {} signed in", session.email);
            Ok(AuthOutcome::SignedIn(session))
        }
        Err(SignInError::Auth(fault)) => {
            log::info!("Sign-in rejected: {fault}");
            match fault.kind {
                AuthFaultKind::CredentialsSignin => Ok(AuthOutcome::Rejected(INVALID_CREDENTIALS)),
                _ => Ok(AuthOutcome::Rejected(SIGN_IN_FAILURE)),
            }
        }
        Err(SignInError::Other(e)) => Err(e),
    }
}
