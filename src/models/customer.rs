use sqlx::{FromRow, PgPool};

/// Entry for the customer select on the invoice forms.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerOption {
    pub id: String,
    pub name: String,
}

pub async fn find_all_options(pool: &PgPool) -> Result<Vec<CustomerOption>, sqlx::Error> {
    sqlx::query_as::<_, CustomerOption>("SELECT id, name FROM customers ORDER BY name ASC")
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, name: &str, email: &str) -> Result<String, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
}
