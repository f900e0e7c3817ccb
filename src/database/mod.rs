pub mod store;

#[cfg(test)]
pub mod memory;

pub use store::{MongoRecordStore, RecordStore, StoreError};

use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection, Database,
};

const APP_NAME: &str = "ride-service";

/// Process-wide MongoDB handle. Built once by `main` and cloned into every
/// handler; the driver's connection pool is shared between the clones.
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Parses the URI and opens the named database. No round-trip is made here,
    /// so an unreachable server only shows up on the first operation.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some(APP_NAME.to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(0);

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { db })
    }

    /// Round-trip check used at startup.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Record store over one collection.
    pub fn record_store(&self, collection: &str) -> MongoRecordStore {
        MongoRecordStore::new(self.collection::<Document>(collection))
    }
}
