use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::user::{self, NewUser};

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the initial login if the users table is empty.
pub async fn seed_admin(pool: &PgPool, email: &str, plain_password: &str) -> Result<(), AppError> {
    let count = user::count(pool).await?;
    if count > 0 {
        log::info!("Database already has {count} user(s), skipping admin seed");
        return Ok(());
    }

    let hashed = password::hash_password(plain_password).map_err(AppError::Hash)?;
    let new = NewUser {
        name: "Admin".to_string(),
        email: email.to_string(),
        password: hashed,
    };
    user::create(pool, &new).await?;
    log::info!("Seeded admin user {email}");
    Ok(())
}
