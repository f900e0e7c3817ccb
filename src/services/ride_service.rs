use std::sync::Arc;

use crate::{
    database::RecordStore,
    models::{NewRide, Record, Ride, RideUpdate},
    utils::{generate_id, AppError},
};

use super::{load_all, load_one, update_and_reload};

#[derive(Clone)]
pub struct RideService {
    store: Arc<dyn RecordStore>,
}

impl RideService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Ride>, AppError> {
        load_all(self.store.as_ref()).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Ride>, AppError> {
        load_one(self.store.as_ref(), id).await
    }

    /// The driver id is stored as given; it is not looked up.
    pub async fn create(&self, new: NewRide) -> Result<Ride, AppError> {
        let ride = Ride::new(generate_id(Ride::ENTITY.id_prefix()), new);
        self.store.insert(ride.to_document()).await?;
        log::info!("✅ Ride created: {} (driver {:?})", ride.id, ride.driver);
        Ok(ride)
    }

    pub async fn update(&self, update: RideUpdate) -> Result<Option<Ride>, AppError> {
        let ride = update_and_reload(self.store.as_ref(), &update.id, update.changes()).await?;
        if ride.is_some() {
            log::info!("✅ Ride updated: {} (available: {})", update.id, update.available);
        }
        Ok(ride)
    }
}
