use sqlx::PgPool;

use super::types::{Invoice, InvoiceChanges, InvoiceListItem, NewInvoice};

pub async fn insert(pool: &PgPool, new: &NewInvoice) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO invoices (customer_id, amount, status, date) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(&new.customer_id)
    .bind(new.amount)
    .bind(new.status.as_str())
    .bind(new.date)
    .execute(pool)
    .await?;
    Ok(())
}

/// Update the mutable columns. Returns the number of rows touched.
pub async fn update(pool: &PgPool, id: &str, changes: &InvoiceChanges) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE invoices \
         SET customer_id = $1, amount = $2, status = $3 \
         WHERE id = $4",
    )
    .bind(&changes.customer_id)
    .bind(changes.amount)
    .bind(changes.status.as_str())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(
        "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All invoices for the listing, newest first.
pub async fn find_all(pool: &PgPool) -> Result<Vec<InvoiceListItem>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceListItem>(
        "SELECT i.id, i.customer_id, c.name AS customer_name, i.amount, i.status, i.date \
         FROM invoices i \
         LEFT JOIN customers c ON c.id = i.customer_id \
         ORDER BY i.date DESC, i.id",
    )
    .fetch_all(pool)
    .await
}
