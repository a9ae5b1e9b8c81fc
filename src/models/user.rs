use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::AppError;

/// Placeholder avatar applied when registration carries no image.
pub const DEFAULT_USER_IMAGE: &str = "https://icons8.com/icon/tZuAOUGm9AuS/user-default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Attendant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Attendant => "ATTENDANT",
        }
    }
}

/// Staff account (stored in the `users` collection).
///
/// `password` holds the bcrypt hash and is only ever serialized towards the
/// database; API responses go through [`UserResponse`], which has no such
/// field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub image: String,
    pub role: Role,
    pub created_at: i64,
}

/// Request to register a user
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub role: Option<Role>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            &self.email,
            &self.username,
            &self.password,
            &self.first_name,
            &self.last_name,
            &self.phone,
        ];

        if required
            .iter()
            .any(|field| field.as_deref().map_or(true, |value| value.trim().is_empty()))
        {
            return Err(AppError::Validation("All fields are required".to_string()));
        }

        Ok(())
    }
}

/// Request to update a user's profile; every field is optional, omitted
/// fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

/// User as exposed by the API: structurally password-free.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub image: String,
    pub role: Role,
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            dob: user.dob,
            gender: user.gender,
            image: user.image,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Attendant card resolved for a shop; only public profile fields, filled
/// by a database projection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopAttendant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub image: String,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "jane@example.com".to_string(),
            username: "jane".to_string(),
            password: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "+1234567890".to_string(),
            dob: None,
            gender: Some("female".to_string()),
            image: DEFAULT_USER_IMAGE.to_string(),
            role: Role::Attendant,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_response_has_no_password_key() {
        let value = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["role"], "ATTENDANT");
    }

    #[test]
    fn test_role_wire_casing() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"ATTENDANT\"").unwrap();
        assert_eq!(role, Role::Attendant);
    }

    #[test]
    fn test_create_request_rejects_missing_fields() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{ "email": "jane@example.com", "username": "jane", "password": "secret" }"#,
        )
        .unwrap();
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_create_request_rejects_blank_fields() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{
                "email": "jane@example.com",
                "username": "  ",
                "password": "secret",
                "firstName": "Jane",
                "lastName": "Doe",
                "phone": "+1234567890"
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_complete_payload() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{
                "email": "jane@example.com",
                "username": "jane",
                "password": "secret",
                "firstName": "Jane",
                "lastName": "Doe",
                "phone": "+1234567890",
                "role": "ADMIN"
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.role, Some(Role::Admin));
    }
}
