pub mod queries;
pub mod schema;
pub mod store;
pub mod types;

pub use queries::{find_all, find_by_id};
pub use schema::{FieldErrors, InvoiceView, ValidInvoice};
pub use store::InvoiceStore;
pub use types::*;
