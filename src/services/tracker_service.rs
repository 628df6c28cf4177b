use crate::{
    database::{MongoDB, TRACKER},
    models::{
        calculate_level, LeaderboardEntry, LogActionRequest, TrackerEntry,
        TrackerEntryResponse, UserSummary,
    },
    utils::{now_bson, AppError},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};

pub const DEFAULT_LEADERBOARD_SIZE: i64 = 10;
pub const MAX_LEADERBOARD_SIZE: i64 = 100;

pub async fn log_action(db: &MongoDB, request: LogActionRequest) -> Result<(), AppError> {
    let entry = TrackerEntry {
        id: None,
        user_id: request.user_id,
        action: request.action,
        category: request.category,
        points: request.points,
        date: now_bson(),
    };

    db.collection::<TrackerEntry>(TRACKER).insert_one(&entry).await?;

    Ok(())
}

/// Entries come back in natural (insertion) order.
pub async fn get_user_tracker(db: &MongoDB, user_id: &str) -> Result<Vec<TrackerEntryResponse>, AppError> {
    let cursor = db
        .collection::<TrackerEntry>(TRACKER)
        .find(doc! { "user_id": user_id })
        .await?;
    let entries: Vec<TrackerEntry> = cursor.try_collect().await?;

    Ok(entries.into_iter().map(TrackerEntryResponse::from).collect())
}

pub async fn get_user_summary(db: &MongoDB, user_id: &str) -> Result<UserSummary, AppError> {
    let cursor = db
        .collection::<TrackerEntry>(TRACKER)
        .find(doc! { "user_id": user_id })
        .await?;
    let entries: Vec<TrackerEntry> = cursor.try_collect().await?;

    Ok(summarize(entries.iter().map(|e| e.points)))
}

pub fn summarize<I: IntoIterator<Item = i64>>(points: I) -> UserSummary {
    let total_points = points.into_iter().fold(0i64, |acc, p| acc.saturating_add(p));

    UserSummary {
        total_points,
        level: calculate_level(total_points),
    }
}

pub fn clamp_leaderboard_size(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_LEADERBOARD_SIZE)
        .clamp(1, MAX_LEADERBOARD_SIZE)
}

/// Point totals per user, highest first. Ties are broken by user id.
pub async fn get_leaderboard(db: &MongoDB, limit: Option<i64>) -> Result<Vec<LeaderboardEntry>, AppError> {
    let pipeline = vec![
        doc! {
            "$group": {
                "_id": "$user_id",
                "total_points": { "$sum": "$points" },
                "actions": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "total_points": -1, "_id": 1 } },
        doc! { "$limit": clamp_leaderboard_size(limit) },
    ];

    let cursor = db.collection::<Document>(TRACKER).aggregate(pipeline).await?;
    let groups: Vec<Document> = cursor.try_collect().await?;

    Ok(groups.iter().map(leaderboard_entry).collect())
}

fn leaderboard_entry(group: &Document) -> LeaderboardEntry {
    let total_points = group.get("total_points").map(as_i64).unwrap_or(0);

    LeaderboardEntry {
        user_id: group.get_str("_id").unwrap_or_default().to_string(),
        total_points,
        actions: group.get("actions").map(as_i64).unwrap_or(0),
        level: calculate_level(total_points),
    }
}

/// `$sum` yields int32, int64 or double depending on the stored values.
/// Doubles round to the nearest integer; `as` saturates at the i64 bounds and maps NaN to 0.
fn as_i64(value: &Bson) -> i64 {
    match value {
        Bson::Int32(v) => i64::from(*v),
        Bson::Int64(v) => *v,
        Bson::Double(v) => v.round() as i64,
        _ => 0,
    }
}
