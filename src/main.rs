use account_auth::config::EnvConfig;
use account_auth::db::postgres_service::PostgresService;
use account_auth::routes::configure_routes;
use actix_web::{web, App, HttpServer};
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
