use actix_web::{web, HttpResponse, ResponseError};
use crate::{
    database::MongoDB,
    models::{CarbonQuery, CarbonRecordResponse, CreateCarbonRequest},
    services::carbon_service,
};

#[utoipa::path(
    post,
    path = "/carbon",
    tag = "Carbon",
    request_body = CreateCarbonRequest,
    responses(
        (status = 200, description = "Stored record", body = CarbonRecordResponse),
        (status = 422, description = "Malformed body or negative footprint")
    )
)]
pub async fn record_footprint(
    db: web::Data<MongoDB>,
    request: web::Json<CreateCarbonRequest>,
) -> HttpResponse {
    log::info!("🌍 POST /carbon - {} kg CO2e", request.carbon_footprint);

    match carbon_service::record_footprint(&db, request.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => {
            log::error!("❌ Error recording footprint: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/carbon",
    tag = "Carbon",
    params(
        ("user_id" = Option<String>, Query, description = "Defaults to anonymous"),
        ("start_date" = Option<String>, Query, description = "RFC 3339, used with end_date"),
        ("end_date" = Option<String>, Query, description = "RFC 3339, used with start_date")
    ),
    responses(
        (status = 200, description = "Records, newest date first", body = [CarbonRecordResponse])
    )
)]
pub async fn list_footprints(
    db: web::Data<MongoDB>,
    query: web::Query<CarbonQuery>,
) -> HttpResponse {
    log::info!("🌍 GET /carbon");

    match carbon_service::list_footprints(&db, query.into_inner()).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            log::error!("❌ Error listing footprints: {}", e);
            e.error_response()
        }
    }
}
