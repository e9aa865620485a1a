use actix_session::Session;

use crate::auth::provider::AuthSession;
use crate::errors::AppError;

const USER_ID: &str = "user_id";
const USER_NAME: &str = "user_name";
const USER_EMAIL: &str = "user_email";

/// Store a successful sign-in. Renews the session id first.
pub fn sign_in(session: &Session, auth: &AuthSession) -> Result<(), AppError> {
    session.renew();
    session
        .insert(USER_ID, &auth.user_id)
        .and_then(|_| session.insert(USER_NAME, &auth.name))
        .and_then(|_| session.insert(USER_EMAIL, &auth.email))
        .map_err(|e| AppError::Session(e.to_string()))
}

pub fn get_user_id(session: &Session) -> Option<String> {
    session.get::<String>(USER_ID).unwrap_or(None)
}

pub fn is_signed_in(session: &Session) -> bool {
    get_user_id(session).is_some()
}

pub fn get_user_name(session: &Session) -> Result<String, AppError> {
    match session.get::<String>(USER_NAME) {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err(AppError::Session("No user name in session".to_string())),
        Err(e) => Err(AppError::Session(e.to_string())),
    }
}
