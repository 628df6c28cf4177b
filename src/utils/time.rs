use chrono::{DateTime, Utc};
use mongodb::bson::DateTime as BsonDateTime;

/// Current instant as a BSON datetime (millisecond precision).
pub fn now_bson() -> BsonDateTime {
    BsonDateTime::now()
}

pub fn to_chrono(dt: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

pub fn to_bson(dt: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(dt.timestamp_millis())
}
