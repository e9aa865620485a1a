use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpResponse, HttpServer, middleware, web};

use invoice_actions::actions::Capabilities;
use invoice_actions::auth::provider::CredentialsProvider;
use invoice_actions::config::Config;
use invoice_actions::handlers::effects::ListingCache;
use invoice_actions::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;
    db::seed_admin(&pool, &config.seed_admin_email, &config.seed_admin_password)
        .await
        .map_err(std::io::Error::other)?;

    let secret_key = config.session_key();
    let provider = web::Data::new(CredentialsProvider::new(pool.clone()));
    let cache = web::Data::new(ListingCache::new());
    let capabilities = web::Data::new(Capabilities::default());

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(provider.clone())
            .app_data(cache.clone())
            .app_data(capabilities.clone())
            .configure(routes::configure)
            .default_service(web::to(|| async {
                HttpResponse::NotFound()
                    .content_type("text/plain; charset=utf-8")
                    .body("Not Found")
            }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
