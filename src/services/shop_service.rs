use futures::stream::StreamExt;
use mongodb::bson::doc;
use uuid::Uuid;

use crate::database::{MongoDB, SHOPS_COLLECTION, USERS_COLLECTION};
use crate::models::{CreateShopRequest, Shop, ShopAttendant};
use crate::utils::{duplicate_key_field, AppError};

/// Open a new shop. The slug's unique index is the source of truth for
/// duplicates.
pub async fn create_shop(db: &MongoDB, request: CreateShopRequest) -> Result<Shop, AppError> {
    request.validate()?;

    let shop = Shop {
        id: Uuid::new_v4().to_string(),
        name: request.name.unwrap_or_default(),
        slug: request.slug.unwrap_or_default(),
        location: request.location.unwrap_or_default(),
        admin_id: request.admin_id.unwrap_or_default(),
        attendant_ids: request.attendant_ids.unwrap_or_default(),
        created_at: chrono::Utc::now().timestamp(),
    };

    let collection = db.collection::<Shop>(SHOPS_COLLECTION);

    collection
        .insert_one(&shop)
        .await
        .map_err(|e| match duplicate_key_field(&e).as_deref() {
            Some("slug") => {
                AppError::Conflict(format!("Shop with slug {} already exists", shop.slug))
            }
            _ => AppError::from(e),
        })?;

    Ok(shop)
}

/// All shops ordered by name descending.
pub async fn list_shops(db: &MongoDB) -> Result<Vec<Shop>, AppError> {
    let collection = db.collection::<Shop>(SHOPS_COLLECTION);

    let mut cursor = collection.find(doc! {}).sort(doc! { "name": -1 }).await?;

    let mut shops = Vec::new();
    while let Some(result) = cursor.next().await {
        shops.push(result?);
    }

    Ok(shops)
}

pub async fn get_shop(db: &MongoDB, id: &str) -> Result<Shop, AppError> {
    let collection = db.collection::<Shop>(SHOPS_COLLECTION);

    collection
        .find_one(doc! { "id": id })
        .await?
        .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))
}

/// Resolve a shop's attendant list against the users collection. The
/// projection keeps the result to public profile fields; result order is
/// whatever the store returns.
pub async fn get_shop_attendants(db: &MongoDB, id: &str) -> Result<Vec<ShopAttendant>, AppError> {
    let shop = get_shop(db, id).await?;

    let users = db.collection::<ShopAttendant>(USERS_COLLECTION);

    let mut cursor = users
        .find(doc! { "id": { "$in": shop.attendant_ids } })
        .projection(doc! {
            "_id": 0,
            "id": 1,
            "firstName": 1,
            "lastName": 1,
            "image": 1,
            "phone": 1,
            "email": 1,
        })
        .await?;

    let mut attendants = Vec::new();
    while let Some(result) = cursor.next().await {
        attendants.push(result?);
    }

    Ok(attendants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_duplicate_slug_is_a_conflict() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/shop-service-test".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        let slug = format!("branch-{}", Uuid::new_v4().simple());
        let request = |name: &str| CreateShopRequest {
            name: Some(name.to_string()),
            slug: Some(slug.clone()),
            location: Some("5th Avenue".to_string()),
            admin_id: Some(Uuid::new_v4().to_string()),
            attendant_ids: None,
        };

        let first = create_shop(&db, request("Downtown")).await.unwrap();
        assert_eq!(first.slug, slug);

        // Same slug, different name and location
        let second = create_shop(&db, request("Uptown")).await;
        match second {
            Err(AppError::Conflict(message)) => assert!(message.contains(&slug)),
            other => panic!("expected slug conflict, got {:?}", other.map(|s| s.slug)),
        }
    }
}
