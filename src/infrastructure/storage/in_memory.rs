//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::storage::{FieldPath, Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory document storage
///
/// Useful for testing and development. Data is lost when the process terminates.
/// `list` and `find_by` return entities in insertion order.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    documents: RwLock<Documents<E>>,
}

#[derive(Debug)]
struct Documents<E> {
    next_position: u64,
    entries: HashMap<String, (u64, E)>,
}

impl<E> Documents<E>
where
    E: StorageEntity,
{
    fn empty() -> Self {
        Self {
            next_position: 0,
            entries: HashMap::new(),
        }
    }

    fn insert_new(&mut self, key: String, entity: E) {
        let position = self.next_position;
        self.next_position += 1;
        self.entries.insert(key, (position, entity));
    }

    fn ordered(&self) -> Vec<&E> {
        let mut entries: Vec<&(u64, E)> = self.entries.values().collect();
        entries.sort_by_key(|(position, _)| *position);
        entries.into_iter().map(|(_, entity)| entity).collect()
    }

    /// Fails if another entity already holds one of `entity`'s unique field values
    fn check_unique(&self, key: &str, entity: &E) -> Result<(), DomainError> {
        let fields = E::unique_fields();
        if fields.is_empty() {
            return Ok(());
        }

        let document = to_document(entity)?;

        for path in fields {
            let Some(value) = path.lookup(&document) else {
                continue;
            };

            for (other_key, (_, other)) in &self.entries {
                if other_key == key {
                    continue;
                }

                if path.lookup(&to_document(other)?) == Some(value) {
                    return Err(DomainError::conflict(format!(
                        "Entity with {} '{}' already exists",
                        path.as_str(),
                        value
                    )));
                }
            }
        }

        Ok(())
    }
}

fn to_document<E: StorageEntity>(entity: &E) -> Result<Value, DomainError> {
    serde_json::to_value(entity)
        .map_err(|e| DomainError::storage(format!("Failed to serialize entity: {}", e)))
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Documents::empty()),
        }
    }

    /// Creates storage pre-populated with entities, in the given order
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut documents = Documents::empty();
        for entity in entities {
            documents.insert_new(entity.key().as_str().to_string(), entity);
        }

        Self {
            documents: RwLock::new(documents),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Documents<E>>, DomainError> {
        self.documents
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Documents<E>>, DomainError> {
        self.documents
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self
            .read()?
            .entries
            .get(key.as_str())
            .map(|(_, entity)| entity.clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.read()?.ordered().into_iter().cloned().collect())
    }

    async fn find_by(&self, path: FieldPath<'_>, value: &str) -> Result<Vec<E>, DomainError> {
        let documents = self.read()?;
        let mut matches = Vec::new();

        for entity in documents.ordered() {
            if path.lookup(&to_document(entity)?) == Some(value) {
                matches.push(entity.clone());
            }
        }

        Ok(matches)
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut documents = self.write()?;

        if documents.entries.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        documents.check_unique(&key, &entity)?;
        documents.insert_new(key, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut documents = self.write()?;

        if !documents.entries.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                key
            )));
        }

        documents.check_unique(&key, &entity)?;
        if let Some((_, stored)) = documents.entries.get_mut(&key) {
            *stored = entity.clone();
        }
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.write()?.entries.remove(key.as_str()).is_some())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.read()?.entries.contains_key(key.as_str()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct TestId(String);

    impl StorageKey for TestId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: TestId,
        name: String,
        tag: Tag,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Tag {
        label: String,
    }

    impl StorageEntity for TestEntity {
        type Key = TestId;

        fn key(&self) -> &Self::Key {
            &self.id
        }
    }

    fn entity(id: &str, name: &str, label: &str) -> TestEntity {
        TestEntity {
            id: TestId(id.to_string()),
            name: name.to_string(),
            tag: Tag {
                label: label.to_string(),
            },
        }
    }

    fn key(id: &str) -> TestId {
        TestId(id.to_string())
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let e = entity("1", "Test", "a");

        storage.create(e.clone()).await.unwrap();

        let result = storage.get(&key("1")).await.unwrap();
        assert_eq!(result, Some(e));
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity("1", "Test", "a")).await.unwrap();

        let result = storage.create(entity("1", "Other", "b")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        let result = storage.update(entity("1", "Test", "a")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_replaces_document() {
        let storage = InMemoryStorage::with_entities(vec![entity("1", "Test", "a")]);

        storage.update(entity("1", "Renamed", "a")).await.unwrap();

        let stored = storage.get(&key("1")).await.unwrap().unwrap();
        assert_eq!(stored.name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete() {
        let storage = InMemoryStorage::with_entities(vec![entity("1", "Test", "a")]);

        assert!(storage.delete(&key("1")).await.unwrap());
        assert!(!storage.delete(&key("1")).await.unwrap());
        assert!(!storage.exists(&key("1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_by_top_level_and_nested_fields() {
        let storage = InMemoryStorage::with_entities(vec![
            entity("1", "Alpha", "concert"),
            entity("2", "Beta", "concert"),
            entity("3", "alpha", "documentary"),
        ]);

        let by_name = storage.find_by(FieldPath::new("name"), "Alpha").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, key("1"));

        let by_label = storage
            .find_by(FieldPath::new("tag.label"), "concert")
            .await
            .unwrap();
        assert_eq!(by_label.len(), 2);

        let none = storage
            .find_one_by(FieldPath::new("name"), "Gamma")
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let storage = InMemoryStorage::with_entities(vec![
            entity("1", "Alpha", "a"),
            entity("2", "Beta", "b"),
        ]);

        assert_eq!(storage.list().await.unwrap().len(), 2);
        assert_eq!(storage.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_and_find_keep_insertion_order() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let ids = ["m", "c", "x", "a", "q", "b", "z", "d"];

        for id in ids {
            storage.create(entity(id, id, "concert")).await.unwrap();
        }
        storage.update(entity("m", "first", "concert")).await.unwrap();
        storage.delete(&key("x")).await.unwrap();
        storage.create(entity("x", "x", "concert")).await.unwrap();

        let listed: Vec<String> = storage
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id.0)
            .collect();
        assert_eq!(listed, ["m", "c", "a", "q", "b", "z", "d", "x"]);

        let found = storage
            .find_by(FieldPath::new("tag.label"), "concert")
            .await
            .unwrap();
        assert_eq!(found[0].name, "first");
        assert_eq!(found.last().unwrap().id, key("x"));
    }

    mod unique_fields {
        use super::*;
        use crate::domain::user::{User, UserId};
        use std::sync::Arc;

        fn user(id: &str, username: &str) -> User {
            User::new(
                UserId::new(id).unwrap(),
                username,
                "$2b$04$hash",
                "someone@example.com",
                None,
            )
        }

        #[tokio::test]
        async fn test_create_rejects_taken_username() {
            let storage: InMemoryStorage<User> = InMemoryStorage::new();
            storage.create(user("user-1", "justincase")).await.unwrap();

            let result = storage.create(user("user-2", "justincase")).await;
            assert!(matches!(result, Err(DomainError::Conflict { .. })));
            assert_eq!(storage.count().await.unwrap(), 1);
        }

        #[tokio::test]
        async fn test_update_rejects_rename_onto_taken_username() {
            let storage = InMemoryStorage::with_entities(vec![
                user("user-1", "justincase"),
                user("user-2", "moviebuff"),
            ]);

            let result = storage.update(user("user-2", "justincase")).await;
            assert!(matches!(result, Err(DomainError::Conflict { .. })));

            storage.update(user("user-1", "justincase")).await.unwrap();
        }

        #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
        async fn test_concurrent_creates_admit_one_holder() {
            let storage: Arc<InMemoryStorage<User>> = Arc::new(InMemoryStorage::new());

            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let storage = Arc::clone(&storage);
                    tokio::spawn(async move {
                        storage
                            .create(user(&format!("user-{}", i), "samename"))
                            .await
                    })
                })
                .collect();

            let mut created = 0;
            for handle in handles {
                if handle.await.unwrap().is_ok() {
                    created += 1;
                }
            }

            assert_eq!(created, 1);
            assert_eq!(storage.count().await.unwrap(), 1);
        }
    }
}
