use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::Result;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::Mutex;

use crate::config::Config;

/// Wire-level connection that a [`ConnectionManager`](crate::database::ConnectionManager)
/// drives through its lifecycle.
#[async_trait]
pub trait Transport: Send + Sync {
    type Handle: Clone + Send + Sync;

    /// Opens the connection and returns a handle bound to `database`.
    async fn connect(&self, database: &str) -> Result<Self::Handle>;

    async fn close(&self) -> Result<()>;
}

pub struct MongoTransport {
    uri: String,
    app_name: String,
    client: Mutex<Option<Client>>,
}

impl MongoTransport {
    pub fn new(config: &Config) -> Self {
        Self {
            uri: config.mongo_uri.clone(),
            app_name: config.app_name.clone(),
            client: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Transport for MongoTransport {
    type Handle = Database;

    async fn connect(&self, database: &str) -> Result<Database> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.app_name = Some(self.app_name.clone());

        let client = Client::with_options(options)?;
        // The driver connects lazily; ping forces server selection now.
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;

        if let Some(previous) = self.client.lock().await.replace(client) {
            previous.shutdown().await;
        }

        Ok(db)
    }

    async fn close(&self) -> Result<()> {
        if let Some(client) = self.client.lock().await.take() {
            client.shutdown().await;
        }
        Ok(())
    }
}
