use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::to_chrono;

pub const ANONYMOUS_USER: &str = "anonymous";

/// Document in the "carbon_footprints" collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    /// kg CO2e
    pub carbon_footprint: f64,
    /// Day the footprint refers to
    pub date: BsonDateTime,
    pub created_at: BsonDateTime,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateCarbonRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub carbon_footprint: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CarbonQuery {
    pub user_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CarbonRecordResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub carbon_footprint: f64,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<CarbonRecord> for CarbonRecordResponse {
    fn from(r: CarbonRecord) -> Self {
        CarbonRecordResponse {
            id: r.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: r.user_id,
            carbon_footprint: r.carbon_footprint,
            date: to_chrono(r.date),
            created_at: to_chrono(r.created_at),
        }
    }
}
