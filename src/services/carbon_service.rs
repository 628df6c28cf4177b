use crate::{
    database::{MongoDB, CARBON_FOOTPRINTS},
    models::{CarbonQuery, CarbonRecord, CarbonRecordResponse, CreateCarbonRequest, ANONYMOUS_USER},
    utils::{now_bson, to_bson, AppError},
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};

pub async fn record_footprint(
    db: &MongoDB,
    request: CreateCarbonRequest,
) -> Result<CarbonRecordResponse, AppError> {
    if !request.carbon_footprint.is_finite() || request.carbon_footprint < 0.0 {
        return Err(AppError::InvalidRequest(
            "carbon_footprint must be a non-negative number".to_string(),
        ));
    }

    let mut record = CarbonRecord {
        id: None,
        user_id: owner(request.user_id),
        carbon_footprint: request.carbon_footprint,
        date: to_bson(request.date),
        created_at: now_bson(),
    };

    let result = db
        .collection::<CarbonRecord>(CARBON_FOOTPRINTS)
        .insert_one(&record)
        .await?;
    record.id = result.inserted_id.as_object_id();

    Ok(CarbonRecordResponse::from(record))
}

/// Newest `date` first.
pub async fn list_footprints(db: &MongoDB, query: CarbonQuery) -> Result<Vec<CarbonRecordResponse>, AppError> {
    let cursor = db
        .collection::<CarbonRecord>(CARBON_FOOTPRINTS)
        .find(build_filter(&query))
        .sort(doc! { "date": -1 })
        .await?;
    let records: Vec<CarbonRecord> = cursor.try_collect().await?;

    Ok(records.into_iter().map(CarbonRecordResponse::from).collect())
}

fn owner(user_id: Option<String>) -> String {
    user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string())
}

/// The date range only applies when both bounds are present.
pub fn build_filter(query: &CarbonQuery) -> Document {
    let mut filter = doc! { "user_id": owner(query.user_id.clone()) };

    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        filter.insert(
            "date",
            doc! { "$gte": to_bson(start), "$lte": to_bson(end) },
        );
    }

    filter
}
