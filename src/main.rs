mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use models::ApiResponse;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Shop Service...");

    // Initialize MongoDB connection (also creates the unique indexes)
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::permissive();

        // Malformed JSON bodies still answer with the canonical envelope
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest()
                    .json(ApiResponse::<()>::error("Invalid request body".to_string())),
            )
            .into()
        });

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Users
            .service(
                web::scope("/api/v1/users")
                    .route("", web::post().to(api::users::create_user))
                    .route("", web::get().to(api::users::get_users))
                    .route(
                        "/update-password/{id}",
                        web::put().to(api::users::update_user_password),
                    )
                    .route("/{id}", web::get().to(api::users::get_user))
                    .route("/{id}", web::put().to(api::users::update_user))
                    .route("/{id}", web::delete().to(api::users::delete_user)),
            )
            // Attendants (global listing + per-shop roster)
            .service(
                web::scope("/api/v1/attendants")
                    .route("", web::get().to(api::users::get_attendants))
                    .route("/shop/{id}", web::get().to(api::shops::get_shop_attendants)),
            )
            // Shops
            .service(
                web::scope("/api/v1/shops")
                    .route("", web::post().to(api::shops::create_shop))
                    .route("", web::get().to(api::shops::get_shops))
                    .route("/{id}", web::get().to(api::shops::get_shop)),
            )
            // Customers (read-only directory)
            .service(
                web::scope("/api/v1/customers")
                    .route("", web::get().to(api::customers::get_customers))
                    .route("/{id}", web::get().to(api::customers::get_customer)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
