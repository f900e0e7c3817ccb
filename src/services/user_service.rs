use std::sync::Arc;

use crate::{
    database::RecordStore,
    models::{NewUser, Record, User, UserUpdate},
    utils::{generate_id, AppError},
};

use super::{load_all, load_one, update_and_reload};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn RecordStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        load_all(self.store.as_ref()).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<User>, AppError> {
        load_one(self.store.as_ref(), id).await
    }

    pub async fn create(&self, new: NewUser) -> Result<User, AppError> {
        let user = User::new(generate_id(User::ENTITY.id_prefix()), new);
        self.store.insert(user.to_document()).await?;
        log::info!("✅ User created: {}", user.id);
        Ok(user)
    }

    pub async fn update(&self, update: UserUpdate) -> Result<Option<User>, AppError> {
        let user = update_and_reload(self.store.as_ref(), &update.id, update.changes()).await?;
        if user.is_some() {
            log::info!("✅ User updated: {} (traveling: {})", update.id, update.traveling);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = Arc::new(MemoryStore::new());
        let service = UserService::new(store.clone());
        store.set_unavailable(true);

        let err = service.create(NewUser { name: "Ana".into() }).await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }

    #[tokio::test]
    async fn test_finish_trip_clears_travel() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        let user = service.create(NewUser { name: "Ana".into() }).await.unwrap();

        service
            .update(UserUpdate { id: user.id.clone(), traveling: true, travel: Some("r_1".into()) })
            .await
            .unwrap();
        let done = service
            .update(UserUpdate { id: user.id.clone(), traveling: false, travel: None })
            .await
            .unwrap()
            .unwrap();

        assert!(!done.traveling);
        assert_eq!(done.travel, None);
    }
}
