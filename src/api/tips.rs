use actix_web::{web, HttpResponse};
use serde::Deserialize;
use crate::services::tips_service::{self, TipsResponse};

#[derive(Debug, Deserialize)]
pub struct TipsQuery {
    pub category: String,
}

#[utoipa::path(
    get,
    path = "/tips",
    tag = "Tips",
    params(
        ("category" = String, Query, description = "transportation, energy, diet or waste")
    ),
    responses(
        (status = 200, description = "Tips for the category (empty when unknown)", body = TipsResponse),
        (status = 422, description = "Missing category")
    )
)]
pub async fn get_tips(query: web::Query<TipsQuery>) -> HttpResponse {
    log::info!("💡 GET /tips - category: {}", query.category);
    HttpResponse::Ok().json(tips_service::get_tips(&query.category))
}
