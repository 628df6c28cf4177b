use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;
use crate::{
    database::MongoDB,
    models::{LeaderboardEntry, LogActionRequest, MessageResponse, TrackerEntryResponse, UserSummary},
    services::tracker_service,
};

#[utoipa::path(
    post,
    path = "/tracker/log",
    tag = "Tracker",
    request_body = LogActionRequest,
    responses(
        (status = 200, description = "Action stored", body = MessageResponse),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn log_action(
    db: web::Data<MongoDB>,
    request: web::Json<LogActionRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "🌿 POST /tracker/log - user: {}, action: {}, points: {}",
        request.user_id, request.action, request.points
    );

    match tracker_service::log_action(&db, request).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Action logged")),
        Err(e) => {
            log::error!("❌ Error logging action: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/tracker/user/{user_id}",
    tag = "Tracker",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Logged actions of the user", body = [TrackerEntryResponse])
    )
)]
pub async fn get_user_tracker(
    db: web::Data<MongoDB>,
    user_id: web::Path<String>,
) -> HttpResponse {
    log::info!("📋 GET /tracker/user/{}", user_id);

    match tracker_service::get_user_tracker(&db, &user_id).await {
        Ok(entries) => {
            log::info!("✅ {} entries for {}", entries.len(), user_id);
            HttpResponse::Ok().json(entries)
        }
        Err(e) => {
            log::error!("❌ Error fetching tracker: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/tracker/user/{user_id}/summary",
    tag = "Tracker",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Total points and level", body = UserSummary)
    )
)]
pub async fn get_user_summary(
    db: web::Data<MongoDB>,
    user_id: web::Path<String>,
) -> HttpResponse {
    log::info!("📊 GET /tracker/user/{}/summary", user_id);

    match tracker_service::get_user_summary(&db, &user_id).await {
        Ok(summary) => {
            log::info!("✅ {} has {} points ({})", user_id, summary.total_points, summary.level);
            HttpResponse::Ok().json(summary)
        }
        Err(e) => {
            log::error!("❌ Error computing summary: {}", e);
            e.error_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/tracker/leaderboard",
    tag = "Tracker",
    params(("limit" = Option<i64>, Query, description = "Number of users (1-100, default 10)")),
    responses(
        (status = 200, description = "Users ranked by total points", body = [LeaderboardEntry])
    )
)]
pub async fn get_leaderboard(
    db: web::Data<MongoDB>,
    query: web::Query<LeaderboardQuery>,
) -> HttpResponse {
    log::info!("🏆 GET /tracker/leaderboard");

    match tracker_service::get_leaderboard(&db, query.limit).await {
        Ok(board) => HttpResponse::Ok().json(board),
        Err(e) => {
            log::error!("❌ Error building leaderboard: {}", e);
            e.error_response()
        }
    }
}
