use async_trait::async_trait;
use mongodb::bson::Document;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::store::{RecordStore, StoreError};
use crate::models::record::FIELD_ID;

/// In-memory record store (for tests). Keeps insertion order like a
/// freshly created collection would.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Document>>,
    unavailable: AtomicBool,
    unacknowledged: AtomicBool,
    vanish_after_update: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails as if the server were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Inserts are dropped and reported as not acknowledged.
    pub fn set_unacknowledged(&self, unacknowledged: bool) {
        self.unacknowledged.store(unacknowledged, Ordering::SeqCst);
    }

    /// A matched update still reports a match, but the record is gone
    /// before anyone can read it back (a concurrent delete).
    pub fn set_vanish_after_update(&self, vanish: bool) {
        self.vanish_after_update.store(vanish, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn snapshot(&self) -> Vec<Document> {
        self.records.read().await.clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }

    fn matches(record: &Document, id: &str) -> bool {
        record.get_str(FIELD_ID).map(|value| value == id).unwrap_or(false)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: Document) -> Result<bool, StoreError> {
        self.check()?;
        if self.unacknowledged.load(Ordering::SeqCst) {
            return Ok(false);
        }
        self.records.write().await.push(record);
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        self.check()?;
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, StoreError> {
        self.check()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|record| Self::matches(record, id)).cloned())
    }

    async fn update_by_id(&self, id: &str, changes: Document) -> Result<u64, StoreError> {
        self.check()?;
        let mut records = self.records.write().await;
        let index = match records.iter().position(|record| Self::matches(record, id)) {
            Some(index) => index,
            None => return Ok(0),
        };
        if self.vanish_after_update.load(Ordering::SeqCst) {
            records.remove(index);
            return Ok(1);
        }
        for (key, value) in changes {
            records[index].insert(key, value);
        }
        Ok(1)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError> {
        self.check()?;
        let mut records = self.records.write().await;
        match records.iter().position(|record| Self::matches(record, id)) {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_update_sets_only_given_fields() {
        let store = MemoryStore::new();
        store.insert(doc! { "id": "d_1", "busy": false, "car": "Sedan" }).await.unwrap();

        assert_eq!(store.update_by_id("d_1", doc! { "busy": true }).await.unwrap(), 1);
        let record = store.find_by_id("d_1").await.unwrap().unwrap();
        assert_eq!(record.get_bool("busy").unwrap(), true);
        assert_eq!(record.get_str("car").unwrap(), "Sedan");
    }

    #[tokio::test]
    async fn test_delete_counts() {
        let store = MemoryStore::new();
        store.insert(doc! { "id": "pay_1" }).await.unwrap();
        assert_eq!(store.delete_by_id("pay_1").await.unwrap(), 1);
        assert_eq!(store.delete_by_id("pay_1").await.unwrap(), 0);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_switches() {
        let store = MemoryStore::new();
        store.set_unacknowledged(true);
        assert!(!store.insert(doc! { "id": "pay_1" }).await.unwrap());
        assert_eq!(store.len().await, 0);

        store.set_unavailable(true);
        assert!(store.find_all().await.is_err());
    }

    #[tokio::test]
    async fn test_vanish_after_update() {
        let store = MemoryStore::new();
        store.insert(doc! { "id": "pay_1", "processed": false }).await.unwrap();
        store.set_vanish_after_update(true);

        assert_eq!(store.update_by_id("pay_1", doc! { "processed": true }).await.unwrap(), 1);
        assert_eq!(store.find_by_id("pay_1").await.unwrap(), None);
        assert_eq!(store.update_by_id("pay_1", doc! { "processed": true }).await.unwrap(), 0);
    }
}
