use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

fn health(status: &str, message: &str) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        message: message.to_string(),
        service: "greensphere-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    match db.ping().await {
        Ok(_) => HttpResponse::Ok().json(health("healthy", "All systems operational")),
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            HttpResponse::ServiceUnavailable()
                .json(health("error", "Database connection is not healthy"))
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Welcome banner", body = WelcomeResponse)
    )
)]
pub async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to The GreenSphere API 🌱".to_string(),
    })
}
