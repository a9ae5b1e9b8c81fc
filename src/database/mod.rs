use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;

pub const USERS_COLLECTION: &str = "users";
pub const SHOPS_COLLECTION: &str = "shops";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("shop-service");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the unique indexes that back every uniqueness guarantee.
    /// Conflict detection relies on them (duplicate-key errors are mapped
    /// to 409s), so a failure here aborts startup.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        log::info!("🔧 Creating database indexes...");

        let users = self.db.collection::<Document>(USERS_COLLECTION);

        for field in ["id", "email", "username", "phone"] {
            users.create_index(unique_index(field)).await?;
            log::info!("   ✅ Unique index ready: users({})", field);
        }

        let shops = self.db.collection::<Document>(SHOPS_COLLECTION);

        for field in ["id", "slug"] {
            shops.create_index(unique_index(field)).await?;
            log::info!("   ✅ Unique index ready: shops({})", field);
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

// Ascending single-field unique index; named `<field>_1` by the server,
// which is what the duplicate-key decoding in `utils::error` expects.
fn unique_index(field: &str) -> IndexModel {
    let mut keys = Document::new();
    keys.insert(field, 1);

    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_connection_and_index_bootstrap() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/shop-service-test".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}
