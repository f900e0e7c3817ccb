use std::sync::Arc;

use crate::{
    database::RecordStore,
    models::{NewPayment, Payment, PaymentUpdate, Record},
    utils::{generate_id, AppError},
};

use super::{load_all, load_one, update_and_reload};

#[derive(Clone)]
pub struct PaymentService {
    store: Arc<dyn RecordStore>,
}

impl PaymentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Payment>, AppError> {
        load_all(self.store.as_ref()).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Payment>, AppError> {
        load_one(self.store.as_ref(), id).await
    }

    /// Unlike the other entities, an unacknowledged payment insert is an error.
    pub async fn create(&self, new: NewPayment) -> Result<Payment, AppError> {
        let payment = Payment::new(generate_id(Payment::ENTITY.id_prefix()), new);
        let acknowledged = self.store.insert(payment.to_document()).await?;
        if !acknowledged {
            return Err(AppError::Unacknowledged(Payment::ENTITY));
        }
        log::info!("✅ Payment created: {} (amount: {})", payment.id, payment.amount);
        Ok(payment)
    }

    pub async fn update(&self, update: PaymentUpdate) -> Result<Option<Payment>, AppError> {
        let payment = update_and_reload(self.store.as_ref(), &update.id, update.changes()).await?;
        match &payment {
            Some(_) => log::info!("✅ Payment updated: {} (processed: {})", update.id, update.processed),
            None => log::warn!("⚠️ Payment {} not found for update", update.id),
        }
        Ok(payment)
    }

    /// Returns whether a payment was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted > 0 {
            log::info!("🗑️  Payment deleted: {}", id);
        }
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    fn new_payment() -> NewPayment {
        NewPayment { user_id: "u_1".into(), amount: 18.75, ride_id: "r_1".into() }
    }

    #[tokio::test]
    async fn test_unacknowledged_insert_fails() {
        let store = Arc::new(MemoryStore::new());
        store.set_unacknowledged(true);
        let service = PaymentService::new(store);

        let err = service.create(new_payment()).await.unwrap_err();
        assert!(matches!(err, AppError::Unacknowledged(_)));
    }

    #[tokio::test]
    async fn test_process_payment() {
        let service = PaymentService::new(Arc::new(MemoryStore::new()));
        let payment = service.create(new_payment()).await.unwrap();

        let processed = service
            .update(PaymentUpdate {
                id: payment.id.clone(),
                processed: true,
                transaction_id: "t1".into(),
                ride_id: "r_1".into(),
                amount: None,
            })
            .await
            .unwrap()
            .unwrap();

        assert!(processed.processed);
        assert_eq!(processed.transaction_id.as_deref(), Some("t1"));
        assert_eq!(processed.amount, 18.75);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = PaymentService::new(Arc::new(MemoryStore::new()));
        let payment = service.create(new_payment()).await.unwrap();

        assert!(service.delete(&payment.id).await.unwrap());
        assert!(!service.delete(&payment.id).await.unwrap());
        assert_eq!(service.find(&payment.id).await.unwrap(), None);
    }
}
