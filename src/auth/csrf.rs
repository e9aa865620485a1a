use actix_session::Session;
use rand::Rng;
use serde::Deserialize;

use crate::errors::AppError;

const SESSION_KEY: &str = "csrf_token";

/// Body of a form whose only field is the CSRF token (logout, delete).
#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// Token for the current session, generated on first use.
pub fn get_or_create_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(SESSION_KEY) {
        return token;
    }
    let token = generate_token();
    let _ = session.insert(SESSION_KEY, &token);
    token
}

/// Compare the submitted token with the one stored in the session.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let stored = session
        .get::<String>(SESSION_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    if stored.is_empty() || !constant_time_eq(&stored, submitted) {
        log::warn!("Rejected form submission with invalid CSRF token");
        return Err(AppError::Csrf);
    }
    Ok(())
}

/// 32 random bytes, hex encoded.
fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
