//! # Storage Layer
//!
//! The [`IdeaStore`] trait is the durable home of all idea records. Storage
//! is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the service or presenters
//! - Keep the rest of the crate **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. All records live in a
//!   single `data.json` (a map of id → idea) under the store's root
//!   directory. Every write rewrites the map through a temp file and a
//!   rename, so a failed write leaves the previous contents on disk intact.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for tests. No persistence.
//!
//! ## Ordering
//!
//! `list_all` always returns records sorted ascending by title (byte-wise
//! `String` order), with the id breaking ties so the listing is fully
//! deterministic.

use crate::error::StoreResult;
use crate::model::Idea;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for idea storage.
///
/// Write operations are atomic per record: either the full field set is
/// committed or nothing changes.
pub trait IdeaStore {
    /// Persist a new idea and return it with its assigned id.
    fn create(&mut self, title: String, description: String) -> StoreResult<Idea>;

    /// Fetch a single idea by id.
    fn read(&self, id: Uuid) -> StoreResult<Idea>;

    /// Replace both fields of an existing idea.
    fn update(&mut self, id: Uuid, title: String, description: String) -> StoreResult<Idea>;

    /// Remove an idea permanently.
    fn delete(&mut self, id: Uuid) -> StoreResult<()>;

    /// All ideas, sorted ascending by title.
    fn list_all(&self) -> StoreResult<Vec<Idea>>;
}

pub(crate) fn sort_by_title(ideas: &mut [Idea]) {
    ideas.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
