use actix_web::{web, HttpResponse, ResponseError};
use crate::{
    database::MongoDB,
    models::{
        CreateCommentRequest, CreatePostRequest, CreateReplyRequest, ForumCommentResponse,
        ForumPostResponse, ForumReplyResponse, MessageResponse,
    },
    services::forum_service,
};

#[utoipa::path(
    post,
    path = "/forum/post",
    tag = "Forum",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post stored", body = MessageResponse),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_post(
    db: web::Data<MongoDB>,
    request: web::Json<CreatePostRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!("🗨️  POST /forum/post - user: {}, title: {}", request.user_id, request.title);

    match forum_service::create_post(&db, request).await {
        Ok(id) => {
            log::info!("✅ Post created: {}", id);
            HttpResponse::Ok().json(MessageResponse::new("Post created"))
        }
        Err(e) => {
            log::error!("❌ Error creating post: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/forum/posts",
    tag = "Forum",
    responses(
        (status = 200, description = "All posts, newest first", body = [ForumPostResponse])
    )
)]
pub async fn list_posts(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /forum/posts");

    match forum_service::list_posts(&db).await {
        Ok(posts) => {
            log::info!("✅ Listed {} posts", posts.len());
            HttpResponse::Ok().json(posts)
        }
        Err(e) => {
            log::error!("❌ Error listing posts: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/forum/post/{post_id}/comments",
    tag = "Forum",
    params(("post_id" = String, Path, description = "Hex id of the post")),
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Comment stored"),
        (status = 400, description = "Malformed post id"),
        (status = 422, description = "Blank content"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn add_comment(
    db: web::Data<MongoDB>,
    post_id: web::Path<String>,
    request: web::Json<CreateCommentRequest>,
) -> HttpResponse {
    log::info!("💬 POST /forum/post/{}/comments - user: {}", post_id, request.user_id);

    match forum_service::add_comment(&db, &post_id, request.into_inner()).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({
            "msg": "Comment added",
            "id": id.to_hex()
        })),
        Err(e) => {
            log::warn!("⚠️ Comment rejected on {}: {}", post_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/forum/post/{post_id}/comments",
    tag = "Forum",
    params(("post_id" = String, Path, description = "Hex id of the post")),
    responses(
        (status = 200, description = "Comments, newest first", body = [ForumCommentResponse]),
        (status = 400, description = "Malformed post id"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn list_comments(
    db: web::Data<MongoDB>,
    post_id: web::Path<String>,
) -> HttpResponse {
    log::info!("💬 GET /forum/post/{}/comments", post_id);

    match forum_service::list_comments(&db, &post_id).await {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(e) => {
            log::warn!("⚠️ Cannot list comments of {}: {}", post_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/forum/post/{post_id}/comments/{comment_id}/replies",
    tag = "Forum",
    params(
        ("post_id" = String, Path, description = "Hex id of the post"),
        ("comment_id" = String, Path, description = "Hex id of the comment")
    ),
    request_body = CreateReplyRequest,
    responses(
        (status = 200, description = "Reply stored"),
        (status = 400, description = "Malformed post or comment id"),
        (status = 404, description = "Post or comment not found"),
        (status = 422, description = "Blank content")
    )
)]
pub async fn add_reply(
    db: web::Data<MongoDB>,
    path: web::Path<(String, String)>,
    request: web::Json<CreateReplyRequest>,
) -> HttpResponse {
    let (post_id, comment_id) = path.into_inner();
    log::info!(
        "↪️  POST /forum/post/{}/comments/{}/replies - user: {}",
        post_id, comment_id, request.user_id
    );

    match forum_service::add_reply(&db, &post_id, &comment_id, request.into_inner()).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({
            "msg": "Reply added",
            "id": id.to_hex()
        })),
        Err(e) => {
            log::warn!("⚠️ Reply rejected on {}: {}", comment_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/forum/post/{post_id}/comments/{comment_id}/replies",
    tag = "Forum",
    params(
        ("post_id" = String, Path, description = "Hex id of the post"),
        ("comment_id" = String, Path, description = "Hex id of the comment")
    ),
    responses(
        (status = 200, description = "Replies, newest first", body = [ForumReplyResponse]),
        (status = 400, description = "Malformed post or comment id"),
        (status = 404, description = "Post or comment not found")
    )
)]
pub async fn list_replies(
    db: web::Data<MongoDB>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (post_id, comment_id) = path.into_inner();
    log::info!("↪️  GET /forum/post/{}/comments/{}/replies", post_id, comment_id);

    match forum_service::list_replies(&db, &post_id, &comment_id).await {
        Ok(replies) => HttpResponse::Ok().json(replies),
        Err(e) => {
            log::warn!("⚠️ Cannot list replies of {}: {}", comment_id, e);
            e.error_response()
        }
    }
}
