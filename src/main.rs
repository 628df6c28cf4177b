mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::services::NewsClient;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    log::info!("🌱 Starting GreenSphere API...");
    log::info!("📊 Database: {}", config.database_name);
    if config.news_api_key.is_none() {
        log::warn!("⚠️ NEWS_API_KEY not set, /news will relay the provider's auth error");
    }

    let db = database::MongoDB::new(&config.mongodb_uri, &config.database_name)
        .await
        .map_err(|e| io::Error::other(format!("Invalid MongoDB configuration: {}", e)))?;

    // An unreachable database does not stop the server; requests fail until it is back
    match db.ping().await {
        Ok(()) => {
            log::info!("✅ MongoDB connected successfully");
            if let Err(e) = db.ensure_indexes().await {
                log::warn!("⚠️ Could not create indexes: {}", e);
            }
        }
        Err(e) => log::error!("❌ MongoDB not reachable at startup: {}", e),
    }

    let news = NewsClient::new(&config.news_api_url, config.news_api_key.clone())
        .map_err(|e| io::Error::other(e.to_string()))?;

    let db_data = web::Data::new(db);
    let news_data = web::Data::new(news);
    let allowed_origins = config.allowed_origins.clone();

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .app_data(news_data.clone())
            .wrap(Compress::default())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
