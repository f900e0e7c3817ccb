use std::sync::Arc;

use crate::{
    database::RecordStore,
    models::{Driver, DriverUpdate, NewDriver, Record},
    utils::{generate_id, AppError},
};

use super::{load_all, load_one, update_and_reload};

#[derive(Clone)]
pub struct DriverService {
    store: Arc<dyn RecordStore>,
}

impl DriverService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        load_all(self.store.as_ref()).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Driver>, AppError> {
        load_one(self.store.as_ref(), id).await
    }

    /// Inserts a fresh driver. The insert acknowledgement is not checked here.
    pub async fn create(&self, new: NewDriver) -> Result<Driver, AppError> {
        let driver = Driver::new(generate_id(Driver::ENTITY.id_prefix()), new);
        self.store.insert(driver.to_document()).await?;
        log::info!("✅ Driver created: {}", driver.id);
        Ok(driver)
    }

    pub async fn update(&self, update: DriverUpdate) -> Result<Option<Driver>, AppError> {
        let driver = update_and_reload(self.store.as_ref(), &update.id, update.changes()).await?;
        if driver.is_some() {
            log::info!("✅ Driver updated: {}", update.id);
        }
        Ok(driver)
    }
}
