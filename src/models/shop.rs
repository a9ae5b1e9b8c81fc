use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::AppError;

/// Shop record (stored in the `shops` collection). Ownership is by
/// reference: `admin_id` points at a user, `attendant_ids` lists the users
/// with attendant access.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub location: String,
    pub admin_id: String,
    #[serde(default)]
    pub attendant_ids: Vec<String>,
    pub created_at: i64,
}

/// Request to open a shop
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub location: Option<String>,
    pub admin_id: Option<String>,
    pub attendant_ids: Option<Vec<String>>,
}

impl CreateShopRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [&self.name, &self.slug, &self.location, &self.admin_id];

        if required
            .iter()
            .any(|field| field.as_deref().map_or(true, |value| value.trim().is_empty()))
        {
            return Err(AppError::Validation("All fields are required".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_admin_id() {
        let request: CreateShopRequest = serde_json::from_str(
            r#"{ "name": "Downtown", "slug": "downtown", "location": "5th Avenue" }"#,
        )
        .unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_attendant_ids_default_to_empty_on_read() {
        // Older documents may predate the attendantIds field
        let shop: Shop = serde_json::from_str(
            r#"{
                "id": "s-1",
                "name": "Downtown",
                "slug": "downtown",
                "location": "5th Avenue",
                "adminId": "u-1",
                "createdAt": 1700000000
            }"#,
        )
        .unwrap();
        assert!(shop.attendant_ids.is_empty());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let shop = Shop {
            id: "s-1".to_string(),
            name: "Downtown".to_string(),
            slug: "downtown".to_string(),
            location: "5th Avenue".to_string(),
            admin_id: "u-1".to_string(),
            attendant_ids: vec!["u-2".to_string()],
            created_at: 1_700_000_000,
        };
        let value = serde_json::to_value(&shop).unwrap();
        assert_eq!(value["adminId"], "u-1");
        assert_eq!(value["attendantIds"][0], "u-2");
    }
}
