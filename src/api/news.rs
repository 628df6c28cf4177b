use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use crate::services::NewsClient;

/// Relays the provider's status and JSON body without translation.
#[utoipa::path(
    get,
    path = "/news",
    tag = "News",
    responses(
        (status = 200, description = "Upstream JSON, passed through as received"),
        (status = 502, description = "Provider unreachable or answered with non-JSON")
    )
)]
pub async fn get_eco_news(news: web::Data<NewsClient>) -> HttpResponse {
    log::info!("📰 GET /news");

    match news.fetch_eco_news().await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(upstream.body)
        }
        Err(e) => {
            log::error!("❌ Error fetching news: {}", e);
            e.error_response()
        }
    }
}
