mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::{io, sync::Arc};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api::Handlers, config::Config, database::MongoDB};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("🚀 Starting Ride Service...");
    log::info!("📊 Database: {}", config.mongo_db);

    let db = MongoDB::connect(&config.mongo_uri, &config.mongo_db)
        .await
        .map_err(|e| {
            log::error!("❌ Failed to configure MongoDB client: {}", e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;

    match db.ping().await {
        Ok(()) => log::info!("✅ MongoDB connected successfully"),
        Err(e) => log::warn!("⚠️  MongoDB ping failed, requests will fail until it is reachable: {}", e),
    }

    let mut handlers = Handlers::default();
    for handler in &config.handlers {
        log::info!("📦 {} -> collection '{}'", handler.entity, handler.collection);
        handlers = handlers.with_store(handler.entity, Arc::new(db.record_store(&handler.collection)));
    }

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    for entity in handlers.enabled() {
        log::info!("   {} http://{}:{}{}", entity, config.host, config.port, entity.path());
    }
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", config.host, config.port);

    let openapi = api::swagger::ApiDoc::openapi();

    HttpServer::new(move || {
        let handlers = handlers.clone();
        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .route("/health", web::get().to(api::health::health_check))
            .configure(move |cfg| handlers.register(cfg))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
