use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::actions::invoice::{create_invoice, delete_invoice, update_invoice};
use crate::actions::{ActionState, Capabilities, INVOICES_ROUTE, Outcome};
use crate::auth::csrf::{self, CsrfOnly};
use crate::errors::{AppError, render};
use crate::handlers::effects::{ListingCache, deliver};
use crate::models::{customer, invoice};
use crate::models::invoice::InvoiceForm;
use crate::templates_structs::{InvoiceFormTemplate, InvoiceFormValues, PageContext};

enum FormMode<'a> {
    Create,
    Edit(&'a str),
}

async fn render_form(
    pool: &PgPool,
    session: &Session,
    mode: FormMode<'_>,
    values: InvoiceFormValues,
    state: ActionState,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session)?;
    let customers = customer::find_all_options(pool).await?;
    let (action, title, submit) = match mode {
        FormMode::Create => (INVOICES_ROUTE.to_string(), "Create Invoice", "Create Invoice"),
        FormMode::Edit(id) => (format!("{INVOICES_ROUTE}/{id}"), "Edit Invoice", "Edit Invoice"),
    };
    render(InvoiceFormTemplate::new(ctx, action, title, submit, customers, values, state))
}

/// GET /dashboard/invoices/create
pub async fn new_form(
    pool: web::Data<PgPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    render_form(&pool, &session, FormMode::Create, InvoiceFormValues::default(), ActionState::default()).await
}

/// POST /dashboard/invoices
pub async fn create(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<ListingCache>,
    form: web::Form<InvoiceForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match create_invoice(pool.get_ref(), &ActionState::default(), &*form).await {
        Outcome::Done(effects) => Ok(deliver(&effects, &cache, INVOICES_ROUTE)),
        Outcome::Failed(state) => {
            render_form(&pool, &session, FormMode::Create, InvoiceFormValues::from(&*form), state).await
        }
    }
}

/// GET /dashboard/invoices/{id}/edit
pub async fn edit_form(
    pool: web::Data<PgPool>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let existing = invoice::find_by_id(&pool, &id).await?.ok_or(AppError::NotFound)?;
    render_form(&pool, &session, FormMode::Edit(&id), InvoiceFormValues::from(&existing), ActionState::default()).await
}

/// POST /dashboard/invoices/{id}
pub async fn update(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<ListingCache>,
    path: web::Path<String>,
    form: web::Form<InvoiceForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match update_invoice(pool.get_ref(), &id, &*form).await {
        Outcome::Done(effects) => Ok(deliver(&effects, &cache, INVOICES_ROUTE)),
        Outcome::Failed(state) => {
            render_form(&pool, &session, FormMode::Edit(&id), InvoiceFormValues::from(&*form), state).await
        }
    }
}

/// POST /dashboard/invoices/{id}/delete
/// Answers 501 while the deployment has deletes switched off.
pub async fn delete(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<ListingCache>,
    capabilities: web::Data<Capabilities>,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match delete_invoice(pool.get_ref(), &capabilities, &id).await? {
        Outcome::Done(effects) => Ok(deliver(&effects, &cache, INVOICES_ROUTE)),
        Outcome::Failed(state) => {
            log::warn!("Delete of invoice {id} failed: {:?}", state.message);
            Ok(deliver(&[], &cache, INVOICES_ROUTE))
        }
    }
}
