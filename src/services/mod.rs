pub mod customer_service;
pub mod shop_service;
pub mod user_service;
