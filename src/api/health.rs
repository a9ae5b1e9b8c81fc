use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::database::MongoDB;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

/// GET /health - Liveness probe, including a database round trip
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service health report", body = HealthResponse))
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let database_ok = db.database().list_collection_names().await.is_ok();

    HttpResponse::Ok().json(HealthResponse {
        status: if database_ok { "healthy" } else { "degraded" }.to_string(),
        service: "shop-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_ok { "connected" } else { "unreachable" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
