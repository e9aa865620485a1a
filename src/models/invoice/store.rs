use std::future::Future;

use sqlx::PgPool;

use super::queries;
use super::types::{InvoiceChanges, NewInvoice};

/// The writes the invoice actions perform. Each call is a single statement.
pub trait InvoiceStore {
    fn insert_invoice(&self, new: &NewInvoice) -> impl Future<Output = Result<(), sqlx::Error>>;

    /// Returns the number of rows updated.
    fn update_invoice(
        &self,
        id: &str,
        changes: &InvoiceChanges,
    ) -> impl Future<Output = Result<u64, sqlx::Error>>;

    /// Returns the number of rows deleted.
    fn delete_invoice(&self, id: &str) -> impl Future<Output = Result<u64, sqlx::Error>>;
}

impl InvoiceStore for PgPool {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error> {
        queries::insert(self, new).await
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<u64, sqlx::Error> {
        queries::update(self, id, changes).await
    }

    async fn delete_invoice(&self, id: &str) -> Result<u64, sqlx::Error> {
        queries::delete(self, id).await
    }
}
