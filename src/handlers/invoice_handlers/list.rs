use actix_session::Session;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::actions::INVOICES_ROUTE;
use crate::errors::{AppError, render};
use crate::handlers::effects::ListingCache;
use crate::models::invoice;
use crate::templates_structs::{InvoiceListTemplate, PageContext};

/// GET /dashboard/invoices
/// Listing rows come from the route cache until an action invalidates it.
pub async fn list(
    pool: web::Data<PgPool>,
    session: Session,
    cache: web::Data<ListingCache>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;

    let invoices = match cache.get(INVOICES_ROUTE) {
        Some(rows) => rows,
        None => {
            let rows = invoice::find_all(&pool).await?;
            cache.put(INVOICES_ROUTE, rows.clone());
            rows
        }
    };

    render(InvoiceListTemplate { ctx, invoices })
}
