use super::{sort_by_title, IdeaStore};
use crate::error::{StoreError, StoreResult};
use crate::model::Idea;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> StoreResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load(&self) -> StoreResult<HashMap<Uuid, Idea>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file)?;
        let ideas: HashMap<Uuid, Idea> = serde_json::from_str(&content)?;
        Ok(ideas)
    }

    // Write through a temp file and rename so a failed write never clobbers
    // the previous data.json.
    fn commit(&self, ideas: &HashMap<Uuid, Idea>) -> StoreResult<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(ideas)?;
        let tmp_file = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp_file, content)?;
        fs::rename(&tmp_file, self.data_file())?;
        Ok(())
    }
}

impl IdeaStore for FileStore {
    fn create(&mut self, title: String, description: String) -> StoreResult<Idea> {
        let mut ideas = self.load()?;
        let idea = Idea::new(title, description);
        ideas.insert(idea.id, idea.clone());
        self.commit(&ideas)?;
        Ok(idea)
    }

    fn read(&self, id: Uuid) -> StoreResult<Idea> {
        let ideas = self.load()?;
        ideas.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, id: Uuid, title: String, description: String) -> StoreResult<Idea> {
        let mut ideas = self.load()?;
        let idea = ideas.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        idea.title = title;
        idea.description = description;
        let updated = idea.clone();
        self.commit(&ideas)?;
        Ok(updated)
    }

    fn delete(&mut self, id: Uuid) -> StoreResult<()> {
        let mut ideas = self.load()?;
        if ideas.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        self.commit(&ideas)?;
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Idea>> {
        let mut ideas: Vec<Idea> = self.load()?.into_values().collect();
        sort_by_title(&mut ideas);
        Ok(ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("ideabook"));
        (dir, store)
    }

    #[test]
    fn create_then_read_returns_equal_record() {
        let (_dir, mut store) = store();
        let created = store
            .create("Post A".to_string(), "Desc A".to_string())
            .unwrap();
        let read = store.read(created.id).unwrap();
        assert_eq!(read, created);
    }

    #[test]
    fn list_is_sorted_ascending_by_title() {
        let (_dir, mut store) = store();
        store.create("Zeta".to_string(), String::new()).unwrap();
        store.create("Alpha".to_string(), String::new()).unwrap();

        let titles: Vec<_> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn list_of_empty_store_is_empty() {
        let (_dir, store) = store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_both_fields() {
        let (_dir, mut store) = store();
        let created = store.create("X".to_string(), "old".to_string()).unwrap();
        store
            .update(created.id, "Y".to_string(), "new".to_string())
            .unwrap();

        let read = store.read(created.id).unwrap();
        assert_eq!(read.title, "Y");
        assert_eq!(read.description, "new");
        assert_eq!(read.id, created.id);
    }

    #[test]
    fn delete_then_read_is_not_found() {
        let (_dir, mut store) = store();
        let created = store.create("Gone".to_string(), String::new()).unwrap();
        store.delete(created.id).unwrap();

        assert!(matches!(
            store.read(created.id),
            Err(StoreError::NotFound(id)) if id == created.id
        ));
    }

    #[test]
    fn operations_on_missing_id_leave_store_unchanged() {
        let (_dir, mut store) = store();
        let kept = store.create("Keep".to_string(), String::new()).unwrap();
        let missing = Uuid::new_v4();

        assert!(matches!(
            store.update(missing, "t".to_string(), "d".to_string()),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.delete(missing), Err(StoreError::NotFound(_))));
        assert!(matches!(store.read(missing), Err(StoreError::NotFound(_))));

        let all = store.list_all().unwrap();
        assert_eq!(all, vec![kept]);
    }

    #[test]
    fn records_persist_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("ideabook");

        let created = {
            let mut store = FileStore::new(root.clone());
            store
                .create("Durable".to_string(), "survives".to_string())
                .unwrap()
        };

        let store = FileStore::new(root);
        assert_eq!(store.read(created.id).unwrap(), created);
    }

    #[test]
    fn blank_fields_are_accepted() {
        let (_dir, mut store) = store();
        let created = store.create(String::new(), String::new()).unwrap();
        let read = store.read(created.id).unwrap();
        assert_eq!(read.title, "");
        assert_eq!(read.description, "");
    }
}
