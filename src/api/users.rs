use actix_web::{web, HttpResponse};

use crate::database::MongoDB;
use crate::models::{
    ApiResponse, CreateUserRequest, UpdatePasswordRequest, UpdateUserRequest, UserResponse,
};
use crate::services::user_service;
use crate::utils::AppError;

/// POST /api/v1/users - Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, password stripped", body = UserResponse),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Email, username or phone already taken"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::create_user(&db, body.into_inner()).await?;

    log::info!("✅ User created: {}", user.id);

    Ok(HttpResponse::Created().json(ApiResponse::with_message("User created successfully", user)))
}

/// GET /api/v1/users - List users, newest first
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, passwords stripped", body = [UserResponse]),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    let users = user_service::list_users(&db).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(users)))
}

/// GET /api/v1/attendants - List attendant-role users, newest first
#[utoipa::path(
    get,
    path = "/api/v1/attendants",
    tag = "Attendants",
    responses(
        (status = 200, description = "All attendants, passwords stripped", body = [UserResponse]),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_attendants(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    let attendants = user_service::list_attendants(&db).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(attendants)))
}

/// GET /api/v1/users/{id} - Fetch a single user
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "Unknown user id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn get_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::get_user(&db, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user)))
}

/// PUT /api/v1/users/{id} - Update a user's profile
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user, password stripped", body = UserResponse),
        (status = 404, description = "Unknown user id"),
        (status = 409, description = "Email, username or phone already taken"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service::update_user(&db, &path.into_inner(), body.into_inner()).await?;

    log::info!("✅ User updated: {}", user.id);

    Ok(HttpResponse::Ok().json(ApiResponse::with_message("User updated successfully", user)))
}

/// PUT /api/v1/users/update-password/{id} - Replace a user's password
#[utoipa::path(
    put,
    path = "/api/v1/users/update-password/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password updated"),
        (status = 404, description = "Unknown user id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn update_user_password(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    user_service::update_password(&db, &id, body.into_inner()).await?;

    log::info!("✅ Password updated for user: {}", id);

    Ok(HttpResponse::Ok().json(ApiResponse::message("Password updated successfully")))
}

/// DELETE /api/v1/users/{id} - Remove a user
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "Unknown user id"),
        (status = 500, description = "Unexpected failure")
    )
)]
pub async fn delete_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    user_service::delete_user(&db, &id).await?;

    log::info!("🗑️ User deleted: {}", id);

    Ok(HttpResponse::Ok().json(ApiResponse::message("User deleted successfully")))
}
