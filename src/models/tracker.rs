use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::Level;
use crate::utils::to_chrono;

/// Document in the "tracker" collection. `user_id` is not checked against "users".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub action: String,
    pub category: String,
    pub points: i64,
    pub date: BsonDateTime,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LogActionRequest {
    pub user_id: String,
    pub action: String,
    pub category: String,
    pub points: i64,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TrackerEntryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub action: String,
    pub category: String,
    pub points: i64,
    pub date: DateTime<Utc>,
}

impl From<TrackerEntry> for TrackerEntryResponse {
    fn from(e: TrackerEntry) -> Self {
        TrackerEntryResponse {
            id: e.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: e.user_id,
            action: e.action,
            category: e.category,
            points: e.points,
            date: to_chrono(e.date),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserSummary {
    pub total_points: i64,
    pub level: Level,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub total_points: i64,
    pub actions: i64,
    pub level: Level,
}
