//! # Idea Service
//!
//! A thin facade over the store: the single entry point presenters use.
//! It adds no business rules — its job is to hold the store handle and to
//! normalize every store failure into the two-kind [`ServiceError`]
//! taxonomy, so presenters never touch store internals or raw store errors.
//!
//! Generic over [`IdeaStore`] so production runs on `FileStore` and tests on
//! `InMemoryStore`.

use crate::error::ServiceResult;
use crate::model::Idea;
use crate::store::IdeaStore;
use uuid::Uuid;

pub struct IdeaService<S: IdeaStore> {
    store: S,
}

impl<S: IdeaStore> IdeaService<S> {
    /// The store handle is passed in explicitly; the service never reaches
    /// for ambient state.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(&mut self, title: String, description: String) -> ServiceResult<Idea> {
        Ok(self.store.create(title, description)?)
    }

    pub fn read(&self, id: Uuid) -> ServiceResult<Idea> {
        Ok(self.store.read(id)?)
    }

    pub fn update(&mut self, id: Uuid, title: String, description: String) -> ServiceResult<Idea> {
        Ok(self.store.update(id, title, description)?)
    }

    pub fn delete(&mut self, id: Uuid) -> ServiceResult<()> {
        Ok(self.store.delete(id)?)
    }

    pub fn list_all(&self) -> ServiceResult<Vec<Idea>> {
        Ok(self.store.list_all()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::store::memory::fixtures::{FailingStore, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn operations_pass_through_to_the_store() {
        let mut service = IdeaService::new(InMemoryStore::new());

        let created = service
            .create("Post A".to_string(), "Desc A".to_string())
            .unwrap();
        assert_eq!(service.read(created.id).unwrap(), created);

        service
            .update(created.id, "Post B".to_string(), "Desc B".to_string())
            .unwrap();
        assert_eq!(service.read(created.id).unwrap().title, "Post B");

        service.delete(created.id).unwrap();
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn missing_id_normalizes_to_not_found() {
        let mut service = IdeaService::new(InMemoryStore::new());
        let missing = Uuid::new_v4();

        assert!(matches!(
            service.read(missing),
            Err(ServiceError::NotFound(id)) if id == missing
        ));
        assert!(matches!(
            service.update(missing, String::new(), String::new()),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(missing),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn write_failure_normalizes_to_persistence() {
        let mut service = IdeaService::new(FailingStore::new());

        assert!(matches!(
            service.create("T".to_string(), "D".to_string()),
            Err(ServiceError::Persistence(_))
        ));
    }

    #[test]
    fn listing_survives_failing_writes() {
        let mut failing = FailingStore::new();
        failing.inner = StoreFixture::new().with_idea("Kept", "still here").store;
        let service = IdeaService::new(failing);

        let all = service.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Kept");
    }
}
