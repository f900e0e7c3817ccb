use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection,
};
use thiserror::Error;

use crate::models::record::FIELD_ID;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Raised by the in-memory test store only.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// One collection of flat records, addressed by their `id` field.
///
/// Every call is a single store operation; nothing here retries or
/// spans more than one document.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns whether the store acknowledged the write.
    async fn insert(&self, record: Document) -> Result<bool, StoreError>;

    /// Every record in the collection, unpaginated.
    async fn find_all(&self) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, StoreError>;

    /// Applies `changes` as a `$set` on the record with this id.
    /// Returns the matched count (0 or 1).
    async fn update_by_id(&self, id: &str, changes: Document) -> Result<u64, StoreError>;

    /// Returns the deleted count (0 or 1).
    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError>;
}

/// MongoDB-backed store over a `Collection<Document>`.
#[derive(Clone)]
pub struct MongoRecordStore {
    collection: Collection<Document>,
}

impl MongoRecordStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    fn by_id(id: &str) -> Document {
        doc! { FIELD_ID: id }
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn insert(&self, record: Document) -> Result<bool, StoreError> {
        // The driver only returns Ok for acknowledged writes.
        self.collection.insert_one(record).await?;
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let records: Vec<Document> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.collection.find_one(Self::by_id(id)).await?)
    }

    async fn update_by_id(&self, id: &str, changes: Document) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(Self::by_id(id), doc! { "$set": changes })
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(Self::by_id(id)).await?;
        Ok(result.deleted_count)
    }
}
