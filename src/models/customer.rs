use serde::Serialize;
use utoipa::ToSchema;

/// Customer reference record. Not persisted: the directory is a fixed
/// in-process sample set, see `services::customer_service`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}
