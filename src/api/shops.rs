use actix_web::{web, HttpResponse};

use crate::database::MongoDB;
use crate::models::{ApiResponse, CreateShopRequest, Shop, ShopAttendant};
use crate::services::shop_service;
use crate::utils::AppError;

/// POST /api/v1/shops - Open a new shop
#[utoipa::path(
    post,
    path = "/api/v1/shops",
    tag = "Shops",
    request_body = CreateShopRequest,
    responses(
        (status = 201, description = "Shop created", body = Shop),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Slug already taken"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn create_shop(
    db: web::Data<MongoDB>,
    body: web::Json<CreateShopRequest>,
) -> Result<HttpResponse, AppError> {
    let shop = shop_service::create_shop(&db, body.into_inner()).await?;

    log::info!("✅ Shop created: {} ({})", shop.name, shop.slug);

    Ok(HttpResponse::Created().json(ApiResponse::with_message("Shop created successfully", shop)))
}

/// GET /api/v1/shops - List shops by name descending
#[utoipa::path(
    get,
    path = "/api/v1/shops",
    tag = "Shops",
    responses(
        (status = 200, description = "All shops", body = [Shop]),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_shops(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    let shops = shop_service::list_shops(&db).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(shops)))
}

/// GET /api/v1/shops/{id} - Fetch a single shop
#[utoipa::path(
    get,
    path = "/api/v1/shops/{id}",
    tag = "Shops",
    params(("id" = String, Path, description = "Shop id")),
    responses(
        (status = 200, description = "Shop found", body = Shop),
        (status = 404, description = "Unknown shop id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_shop(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let shop = shop_service::get_shop(&db, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(shop)))
}

/// GET /api/v1/attendants/shop/{id} - List a shop's attendants
#[utoipa::path(
    get,
    path = "/api/v1/attendants/shop/{id}",
    tag = "Attendants",
    params(("id" = String, Path, description = "Shop id")),
    responses(
        (status = 200, description = "Attendant profiles for the shop", body = [ShopAttendant]),
        (status = 404, description = "Unknown shop id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_shop_attendants(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let attendants = shop_service::get_shop_attendants(&db, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(attendants)))
}
