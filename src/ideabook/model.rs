use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single blog idea.
///
/// Blank titles and descriptions are allowed; the store persists whatever it
/// is given. The id is minted once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl Idea {
    /// Builds a fresh idea with a newly assigned id. Only stores should call
    /// this; everything else receives ideas from the store.
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
        }
    }
}
