use actix_web::{web, HttpResponse, ResponseError};
use crate::{
    database::MongoDB,
    models::{MessageResponse, SignUpRequest, UserResponse},
    services::user_service,
    utils::AppError,
};

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Users",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 400, description = "Email already registered"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn signup(
    db: web::Data<MongoDB>,
    request: web::Json<SignUpRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let email = request.email.clone();
    log::info!("📝 POST /signup - email: {}", email);

    match user_service::sign_up(&db, request).await {
        Ok(()) => {
            log::info!("✅ User created: {}", email);
            HttpResponse::Ok().json(MessageResponse::new("User successfully created"))
        }
        Err(e @ AppError::Conflict(_)) => {
            log::warn!("⚠️ Signup rejected: {} - {}", email, e);
            e.error_response()
        }
        Err(e) => {
            log::error!("❌ Signup failed: {} - {}", email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every registered user", body = [UserResponse]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("👥 GET /users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            e.error_response()
        }
    }
}
