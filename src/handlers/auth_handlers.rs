use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::actions::INVOICES_ROUTE;
use crate::actions::authenticate::{AuthOutcome, authenticate};
use crate::auth::provider::{Credentials, CredentialsProvider};
use crate::auth::csrf::{self, CsrfOnly};
use crate::auth::session as auth_session;
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub csrf_token: String,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// GET /login
pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if auth_session::is_signed_in(&session) {
        return Ok(see_other(INVOICES_ROUTE));
    }

    let csrf_token = csrf::get_or_create_token(&session);
    render(LoginTemplate { error: None, email: String::new(), csrf_token })
}

/// POST /login
pub async fn login_submit(
    session: Session,
    provider: web::Data<CredentialsProvider>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match authenticate(provider.get_ref(), None, &form.credentials).await? {
        AuthOutcome::SignedIn(auth) => {
            auth_session::sign_in(&session, &auth)?;
            Ok(see_other(INVOICES_ROUTE))
        }
        AuthOutcome::Rejected(msg) => {
            let csrf_token = csrf::get_or_create_token(&session);
            render(LoginTemplate {
                error: Some(msg.to_string()),
                email: form.credentials.email.clone(),
                csrf_token,
            })
        }
    }
}

/// POST /logout
pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}
