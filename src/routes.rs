use actix_web::{HttpResponse, middleware, web};

use crate::actions::INVOICES_ROUTE;
use crate::auth;
use crate::handlers::{auth_handlers, invoice_handlers};

/// Register every route. Shared by the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", INVOICES_ROUTE))
                .finish()
        }))
        // Protected routes
        .service(
            web::scope("/dashboard")
                .wrap(middleware::from_fn(auth::middleware::require_auth))
                .route("/invoices", web::get().to(invoice_handlers::list))
                // /invoices/create BEFORE /invoices/{id} to avoid routing conflict
                .route("/invoices/create", web::get().to(invoice_handlers::new_form))
                .route("/invoices", web::post().to(invoice_handlers::create))
                .route("/invoices/{id}/edit", web::get().to(invoice_handlers::edit_form))
                .route("/invoices/{id}", web::post().to(invoice_handlers::update))
                .route("/invoices/{id}/delete", web::post().to(invoice_handlers::delete)),
        )
        .route("/logout", web::post().to(auth_handlers::logout));
}
