use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;
use std::time::Duration;

pub const USERS: &str = "users";
pub const TRACKER: &str = "tracker";
pub const FORUM: &str = "forum";
pub const FORUM_COMMENTS: &str = "forum_comments";
pub const FORUM_REPLIES: &str = "forum_replies";
pub const CARBON_FOOTPRINTS: &str = "carbon_footprints";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the pooled client. No round trip to the server happens here,
    /// use `ping` to verify connectivity.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { db })
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Creates the lookup indexes the routes rely on. `users.email` stays
    /// non-unique: signup does its own check-then-insert.
    pub async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        log::info!("🔧 Creating database indexes...");

        let indexes: [(&str, Document); 6] = [
            (USERS, doc! { "email": 1 }),
            (TRACKER, doc! { "user_id": 1 }),
            (FORUM, doc! { "timestamp": -1 }),
            (FORUM_COMMENTS, doc! { "post_id": 1, "timestamp": -1 }),
            (FORUM_REPLIES, doc! { "comment_id": 1, "timestamp": -1 }),
            (CARBON_FOOTPRINTS, doc! { "user_id": 1, "date": -1 }),
        ];

        for (collection, keys) in indexes {
            let model = IndexModel::builder().keys(keys.clone()).build();
            match self.collection::<Document>(collection).create_index(model).await {
                Ok(_) => log::info!("   ✅ Index ready: {}({:?})", collection, keys.keys().collect::<Vec<_>>()),
                Err(e) => log::debug!("   ℹ️  Index not created on {}: {}", collection, e),
            }
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

#[cfg(test)]
pub mod test_support {
    use super::MongoDB;
    use mongodb::bson::oid::ObjectId;

    pub fn test_uri() -> String {
        std::env::var("MONGODB_URI").unwrap_or_else(|_| crate::config::DEFAULT_MONGODB_URI.to_string())
    }

    /// Client pointed at a throwaway database; nothing is contacted until a query runs.
    pub async fn lazy_db() -> MongoDB {
        MongoDB::new(&test_uri(), "greensphere_unused")
            .await
            .expect("client options should parse")
    }

    /// Connects to a fresh, uniquely named database on a live server.
    pub async fn fresh_db() -> MongoDB {
        let name = format!("greensphere_test_{}", ObjectId::new().to_hex());
        let db = MongoDB::new(&test_uri(), &name)
            .await
            .expect("client options should parse");
        db.ping().await.expect("MongoDB must be running for ignored tests");
        db
    }

    pub async fn drop_db(db: &MongoDB) {
        let _ = db.database().drop().await;
    }
}
