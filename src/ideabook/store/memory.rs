use super::{sort_by_title, IdeaStore};
use crate::error::{StoreError, StoreResult};
use crate::model::Idea;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage for tests. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    ideas: HashMap<Uuid, Idea>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdeaStore for InMemoryStore {
    fn create(&mut self, title: String, description: String) -> StoreResult<Idea> {
        let idea = Idea::new(title, description);
        self.ideas.insert(idea.id, idea.clone());
        Ok(idea)
    }

    fn read(&self, id: Uuid) -> StoreResult<Idea> {
        self.ideas.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, id: Uuid, title: String, description: String) -> StoreResult<Idea> {
        let idea = self.ideas.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        idea.title = title;
        idea.description = description;
        Ok(idea.clone())
    }

    fn delete(&mut self, id: Uuid) -> StoreResult<()> {
        if self.ideas.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Idea>> {
        let mut ideas: Vec<Idea> = self.ideas.values().cloned().collect();
        sort_by_title(&mut ideas);
        Ok(ideas)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_idea(mut self, title: &str, description: &str) -> Self {
            self.store
                .create(title.to_string(), description.to_string())
                .unwrap();
            self
        }
    }

    /// Store whose writes always fail. Reads delegate to the seeded inner
    /// store, so presenter flows can render a listing and then hit a write
    /// failure.
    pub struct FailingStore {
        pub inner: InMemoryStore,
    }

    impl Default for FailingStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self {
                inner: InMemoryStore::new(),
            }
        }

        fn write_failure<T>() -> StoreResult<T> {
            Err(StoreError::Store("backing file unavailable".to_string()))
        }
    }

    impl IdeaStore for FailingStore {
        fn create(&mut self, _title: String, _description: String) -> StoreResult<Idea> {
            Self::write_failure()
        }

        fn read(&self, id: Uuid) -> StoreResult<Idea> {
            self.inner.read(id)
        }

        fn update(&mut self, _id: Uuid, _title: String, _description: String) -> StoreResult<Idea> {
            Self::write_failure()
        }

        fn delete(&mut self, _id: Uuid) -> StoreResult<()> {
            Self::write_failure()
        }

        fn list_all(&self) -> StoreResult<Vec<Idea>> {
            self.inner.list_all()
        }
    }
}
