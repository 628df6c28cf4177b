use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::to_chrono;

/// Document in the "forum" collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub timestamp: BsonDateTime,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ForumPostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ForumPost> for ForumPostResponse {
    fn from(p: ForumPost) -> Self {
        ForumPostResponse {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: p.user_id,
            title: p.title,
            content: p.content,
            timestamp: to_chrono(p.timestamp),
        }
    }
}

/// Document in the "forum_comments" collection; `post_id` is the hex id of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumComment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: BsonDateTime,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCommentRequest {
    pub user_id: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ForumCommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ForumComment> for ForumCommentResponse {
    fn from(c: ForumComment) -> Self {
        ForumCommentResponse {
            id: c.id.map(|id| id.to_hex()).unwrap_or_default(),
            post_id: c.post_id,
            user_id: c.user_id,
            content: c.content,
            timestamp: to_chrono(c.timestamp),
        }
    }
}

/// Document in the "forum_replies" collection, answering one comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumReply {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub post_id: String,
    pub comment_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: BsonDateTime,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateReplyRequest {
    pub user_id: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ForumReplyResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub post_id: String,
    pub comment_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ForumReply> for ForumReplyResponse {
    fn from(r: ForumReply) -> Self {
        ForumReplyResponse {
            id: r.id.map(|id| id.to_hex()).unwrap_or_default(),
            post_id: r.post_id,
            comment_id: r.comment_id,
            user_id: r.user_id,
            content: r.content,
            timestamp: to_chrono(r.timestamp),
        }
    }
}
