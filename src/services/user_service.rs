use bcrypt::{hash, DEFAULT_COST};
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};
use uuid::Uuid;

use crate::database::{MongoDB, USERS_COLLECTION};
use crate::models::{
    CreateUserRequest, Role, UpdatePasswordRequest, UpdateUserRequest, User, UserResponse,
    DEFAULT_USER_IMAGE,
};
use crate::utils::{duplicate_key_field, AppError};

/// Register a new user. Uniqueness of email/username/phone is enforced by
/// the collection's unique indexes; a duplicate-key write error is mapped
/// back to a 409 naming the offending field.
pub async fn create_user(
    db: &MongoDB,
    request: CreateUserRequest,
) -> Result<UserResponse, AppError> {
    request.validate()?;

    let hashed_password = hash(request.password.as_deref().unwrap_or_default(), DEFAULT_COST)
        .map_err(|e| AppError::Database(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        email: request.email.unwrap_or_default(),
        username: request.username.unwrap_or_default(),
        password: hashed_password,
        first_name: request.first_name.unwrap_or_default(),
        last_name: request.last_name.unwrap_or_default(),
        phone: request.phone.unwrap_or_default(),
        dob: request.dob,
        gender: request.gender,
        image: request
            .image
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_IMAGE.to_string()),
        role: request.role.unwrap_or(Role::Attendant),
        created_at: chrono::Utc::now().timestamp(),
    };

    let collection = db.collection::<User>(USERS_COLLECTION);

    collection
        .insert_one(&user)
        .await
        .map_err(|e| {
            unique_conflict(
                e,
                Some(user.email.as_str()),
                Some(user.username.as_str()),
                Some(user.phone.as_str()),
            )
        })?;

    Ok(user.into())
}

/// All users, newest first, password-free.
pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let mut cursor = collection
        .find(doc! {})
        .sort(doc! { "createdAt": -1 })
        .await?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        users.push(UserResponse::from(result?));
    }

    Ok(users)
}

pub async fn get_user(db: &MongoDB, id: &str) -> Result<UserResponse, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let user = collection
        .find_one(doc! { "id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(user.into())
}

/// Partial profile update. Only supplied fields are written; a supplied
/// password is re-hashed, an omitted one keeps the stored hash.
pub async fn update_user(
    db: &MongoDB,
    id: &str,
    request: UpdateUserRequest,
) -> Result<UserResponse, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let existing = collection
        .find_one(doc! { "id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let mut update = Document::new();

    if let Some(email) = &request.email {
        update.insert("email", email.as_str());
    }
    if let Some(username) = &request.username {
        update.insert("username", username.as_str());
    }
    if let Some(first_name) = &request.first_name {
        update.insert("firstName", first_name.as_str());
    }
    if let Some(last_name) = &request.last_name {
        update.insert("lastName", last_name.as_str());
    }
    if let Some(phone) = &request.phone {
        update.insert("phone", phone.as_str());
    }
    if let Some(dob) = &request.dob {
        update.insert("dob", dob.as_str());
    }
    if let Some(gender) = &request.gender {
        update.insert("gender", gender.as_str());
    }
    if let Some(image) = &request.image {
        update.insert("image", image.as_str());
    }
    if let Some(role) = &request.role {
        update.insert("role", role.as_str());
    }
    if let Some(password) = &request.password {
        let hashed = hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Database(format!("Failed to hash password: {}", e)))?;
        update.insert("password", hashed);
    }

    if update.is_empty() {
        return Ok(existing.into());
    }

    collection
        .update_one(doc! { "id": id }, doc! { "$set": update })
        .await
        .map_err(|e| {
            unique_conflict(
                e,
                request.email.as_deref(),
                request.username.as_deref(),
                request.phone.as_deref(),
            )
        })?;

    let updated = collection
        .find_one(doc! { "id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(updated.into())
}

pub async fn update_password(
    db: &MongoDB,
    id: &str,
    request: UpdatePasswordRequest,
) -> Result<(), AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    collection
        .find_one(doc! { "id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let hashed = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AppError::Database(format!("Failed to hash password: {}", e)))?;

    collection
        .update_one(doc! { "id": id }, doc! { "$set": { "password": hashed } })
        .await?;

    Ok(())
}

pub async fn delete_user(db: &MongoDB, id: &str) -> Result<(), AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let result = collection.delete_one(doc! { "id": id }).await?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(())
}

/// Users with the ATTENDANT role, newest first.
pub async fn list_attendants(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let collection = db.collection::<User>(USERS_COLLECTION);

    let mut cursor = collection
        .find(doc! { "role": Role::Attendant.as_str() })
        .sort(doc! { "createdAt": -1 })
        .await?;

    let mut attendants = Vec::new();
    while let Some(result) = cursor.next().await {
        attendants.push(UserResponse::from(result?));
    }

    Ok(attendants)
}

fn unique_conflict(
    err: mongodb::error::Error,
    email: Option<&str>,
    username: Option<&str>,
    phone: Option<&str>,
) -> AppError {
    match duplicate_key_field(&err).as_deref() {
        Some("email") => AppError::Conflict(format!(
            "Email {} already exists",
            email.unwrap_or_default()
        )),
        Some("username") => AppError::Conflict(format!(
            "Username {} already taken",
            username.unwrap_or_default()
        )),
        Some("phone") => AppError::Conflict(format!(
            "Phone number {} already exists",
            phone.unwrap_or_default()
        )),
        _ => AppError::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rehash_invalidates_old_password() {
        // Low cost keeps the test fast; the service itself uses DEFAULT_COST
        let old_hash = hash("old-password", 4).unwrap();
        let new_hash = hash("new-password", 4).unwrap();

        assert!(bcrypt::verify("new-password", &new_hash).unwrap());
        assert!(!bcrypt::verify("old-password", &new_hash).unwrap());
        assert!(bcrypt::verify("old-password", &old_hash).unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_user_lifecycle_against_database() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/shop-service-test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let suffix = Uuid::new_v4().simple().to_string();
        let request = CreateUserRequest {
            email: Some(format!("{}@example.com", suffix)),
            username: Some(format!("user-{}", suffix)),
            password: Some("hunter2".to_string()),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            phone: Some(format!("+1{}", &suffix[..9])),
            dob: None,
            gender: None,
            image: None,
            role: None,
        };

        let created = create_user(&db, request).await.unwrap();
        assert_eq!(created.image, DEFAULT_USER_IMAGE);
        assert_eq!(created.role, Role::Attendant);

        let fetched = get_user(&db, &created.id).await.unwrap();
        assert_eq!(fetched.email, created.email);

        update_password(
            &db,
            &created.id,
            UpdatePasswordRequest {
                password: "correct-horse".to_string(),
            },
        )
        .await
        .unwrap();

        delete_user(&db, &created.id).await.unwrap();
        assert!(matches!(
            get_user(&db, &created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
