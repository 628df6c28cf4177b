use crate::{
    database::{MongoDB, FORUM, FORUM_COMMENTS, FORUM_REPLIES},
    models::{
        CreateCommentRequest, CreatePostRequest, CreateReplyRequest, ForumComment,
        ForumCommentResponse, ForumPost, ForumPostResponse, ForumReply, ForumReplyResponse,
    },
    utils::{now_bson, AppError},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

pub async fn create_post(db: &MongoDB, request: CreatePostRequest) -> Result<ObjectId, AppError> {
    let post = ForumPost {
        id: None,
        user_id: request.user_id,
        title: request.title,
        content: request.content,
        timestamp: now_bson(),
    };

    let result = db.collection::<ForumPost>(FORUM).insert_one(&post).await?;

    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Inserted post has no ObjectId".to_string()))
}

/// Newest first.
pub async fn list_posts(db: &MongoDB) -> Result<Vec<ForumPostResponse>, AppError> {
    let cursor = db
        .collection::<ForumPost>(FORUM)
        .find(doc! {})
        .sort(doc! { "timestamp": -1, "_id": -1 })
        .await?;
    let posts: Vec<ForumPost> = cursor.try_collect().await?;

    Ok(posts.into_iter().map(ForumPostResponse::from).collect())
}

pub fn parse_post_id(post_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(post_id).map_err(|_| AppError::BadId(format!("Invalid post id '{}'", post_id)))
}

pub fn parse_comment_id(comment_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(comment_id)
        .map_err(|_| AppError::BadId(format!("Invalid comment id '{}'", comment_id)))
}

fn require_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::InvalidRequest("content must not be blank".to_string()));
    }
    Ok(())
}

/// Comments and replies reference their parents by the lowercase hex form,
/// whatever casing the caller used in the path.
async fn ensure_post_exists(db: &MongoDB, post_id: &str) -> Result<ObjectId, AppError> {
    let oid = parse_post_id(post_id)?;

    let post = db
        .collection::<Document>(FORUM)
        .find_one(doc! { "_id": oid })
        .await?;

    match post {
        Some(_) => Ok(oid),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// The comment must exist and belong to the given post.
async fn ensure_comment_exists(
    db: &MongoDB,
    post_id: &str,
    comment_id: &str,
) -> Result<(ObjectId, ObjectId), AppError> {
    let post_oid = parse_post_id(post_id)?;
    let comment_oid = parse_comment_id(comment_id)?;
    ensure_post_exists(db, post_id).await?;

    let comment = db
        .collection::<Document>(FORUM_COMMENTS)
        .find_one(doc! { "_id": comment_oid, "post_id": post_oid.to_hex() })
        .await?;

    match comment {
        Some(_) => Ok((post_oid, comment_oid)),
        None => Err(AppError::NotFound("Comment not found".to_string())),
    }
}

pub async fn add_comment(
    db: &MongoDB,
    post_id: &str,
    request: CreateCommentRequest,
) -> Result<ObjectId, AppError> {
    require_content(&request.content)?;
    let post_oid = ensure_post_exists(db, post_id).await?;

    let comment = ForumComment {
        id: None,
        post_id: post_oid.to_hex(),
        user_id: request.user_id,
        content: request.content,
        timestamp: now_bson(),
    };

    let result = db
        .collection::<ForumComment>(FORUM_COMMENTS)
        .insert_one(&comment)
        .await?;

    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Inserted comment has no ObjectId".to_string()))
}

pub async fn list_comments(db: &MongoDB, post_id: &str) -> Result<Vec<ForumCommentResponse>, AppError> {
    let post_oid = ensure_post_exists(db, post_id).await?;

    let cursor = db
        .collection::<ForumComment>(FORUM_COMMENTS)
        .find(doc! { "post_id": post_oid.to_hex() })
        .sort(doc! { "timestamp": -1, "_id": -1 })
        .await?;
    let comments: Vec<ForumComment> = cursor.try_collect().await?;

    Ok(comments.into_iter().map(ForumCommentResponse::from).collect())
}

pub async fn add_reply(
    db: &MongoDB,
    post_id: &str,
    comment_id: &str,
    request: CreateReplyRequest,
) -> Result<ObjectId, AppError> {
    require_content(&request.content)?;
    let (post_oid, comment_oid) = ensure_comment_exists(db, post_id, comment_id).await?;

    let reply = ForumReply {
        id: None,
        post_id: post_oid.to_hex(),
        comment_id: comment_oid.to_hex(),
        user_id: request.user_id,
        content: request.content,
        timestamp: now_bson(),
    };

    let result = db
        .collection::<ForumReply>(FORUM_REPLIES)
        .insert_one(&reply)
        .await?;

    result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Inserted reply has no ObjectId".to_string()))
}

pub async fn list_replies(
    db: &MongoDB,
    post_id: &str,
    comment_id: &str,
) -> Result<Vec<ForumReplyResponse>, AppError> {
    let (_, comment_oid) = ensure_comment_exists(db, post_id, comment_id).await?;

    let cursor = db
        .collection::<ForumReply>(FORUM_REPLIES)
        .find(doc! { "comment_id": comment_oid.to_hex() })
        .sort(doc! { "timestamp": -1, "_id": -1 })
        .await?;
    let replies: Vec<ForumReply> = cursor.try_collect().await?;

    Ok(replies.into_iter().map(ForumReplyResponse::from).collect())
}
