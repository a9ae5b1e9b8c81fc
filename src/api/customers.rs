use actix_web::{web, HttpResponse, Responder};

use crate::models::{ApiResponse, Customer};
use crate::services::customer_service;

/// GET /api/v1/customers - List the customer directory
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    responses((status = 200, description = "The full directory", body = [Customer]))
)]
pub async fn get_customers() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::ok(customer_service::list_customers()))
}

/// GET /api/v1/customers/{id} - Look up a customer by id
///
/// A miss (unknown or unparsable id) answers 200 with `data: null`.
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer id (integer)")),
    responses((status = 200, description = "Customer, or null on a miss", body = Customer))
)]
pub async fn get_customer(path: web::Path<String>) -> impl Responder {
    let customer = path
        .parse::<i32>()
        .ok()
        .and_then(customer_service::find_customer);

    HttpResponse::Ok().json(ApiResponse::maybe(customer))
}
