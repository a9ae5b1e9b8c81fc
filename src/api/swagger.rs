use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Service API",
        version = "1.0.0",
        description = "REST backend for shop management: staff accounts (admins and attendants), shops and their attendant rosters, and a read-only customer directory."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::get_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::update_user_password,
        crate::api::users::delete_user,

        // Attendants
        crate::api::users::get_attendants,
        crate::api::shops::get_shop_attendants,

        // Shops
        crate::api::shops::create_shop,
        crate::api::shops::get_shops,
        crate::api::shops::get_shop,

        // Customers
        crate::api::customers::get_customers,
        crate::api::customers::get_customer,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
            crate::models::UpdatePasswordRequest,
            crate::models::UserResponse,
            crate::models::ShopAttendant,
            crate::models::Role,
            crate::models::Shop,
            crate::models::CreateShopRequest,
            crate::models::Customer,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "Staff account management: registration, profile and password updates, deletion."),
        (name = "Attendants", description = "Attendant listings, globally and per shop."),
        (name = "Shops", description = "Shop creation and lookup."),
        (name = "Customers", description = "Read-only customer directory."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
