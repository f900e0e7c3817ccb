pub mod driver_service;
pub mod payment_service;
pub mod ride_service;
pub mod user_service;

pub use driver_service::DriverService;
pub use payment_service::PaymentService;
pub use ride_service::RideService;
pub use user_service::UserService;

use crate::{
    database::RecordStore,
    models::Record,
    utils::AppError,
};

/// Loads and maps every record; one malformed document fails the whole list.
pub(crate) async fn load_all<T: Record>(store: &dyn RecordStore) -> Result<Vec<T>, AppError> {
    let documents = store.find_all().await?;
    let records = documents
        .iter()
        .map(T::from_document)
        .collect::<Result<Vec<T>, _>>()?;
    Ok(records)
}

pub(crate) async fn load_one<T: Record>(store: &dyn RecordStore, id: &str) -> Result<Option<T>, AppError> {
    match store.find_by_id(id).await? {
        Some(document) => Ok(Some(T::from_document(&document)?)),
        None => Ok(None),
    }
}

/// `$set` the changes, then re-read the record so the caller sees the stored state.
/// `None` when nothing matched or the record vanished before the re-read.
pub(crate) async fn update_and_reload<T: Record>(
    store: &dyn RecordStore,
    id: &str,
    changes: mongodb::bson::Document,
) -> Result<Option<T>, AppError> {
    let matched = store.update_by_id(id, changes).await?;
    if matched == 0 {
        log::debug!("🔍 No {} record matched id {}", T::ENTITY, id);
        return Ok(None);
    }
    load_one(store, id).await
}
