pub mod auth_handlers;
pub mod effects;
pub mod invoice_handlers;
