//! Storage-backed user repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::storage::{FieldPath, Storage};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

const USERNAME: FieldPath<'static> = FieldPath::new("Username");

/// User repository over the `users` document collection
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }

    /// Early check for a readable conflict; the storage backend enforces the constraint atomically
    async fn ensure_username_free(&self, user: &User) -> Result<(), DomainError> {
        let holder = self.storage.find_one_by(USERNAME, user.username()).await?;

        match holder {
            Some(existing) if existing.id() != user.id() => Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username()
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.storage.find_one_by(USERNAME, username).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.ensure_username_free(&user).await?;
        self.storage.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.ensure_username_free(&user).await?;
        self.storage.update(user).await
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.storage.list().await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn repository() -> StorageUserRepository {
        StorageUserRepository::new(Arc::new(InMemoryStorage::<User>::new()))
    }

    fn user(id: &str, username: &str) -> User {
        User::new(
            UserId::new(id).unwrap(),
            username,
            "$2b$10$hash",
            format!("{}@example.com", username),
            None,
        )
    }

    #[tokio::test]
    async fn test_create_and_get_by_username() {
        let repo = repository();
        repo.create(user("user-1", "justincase")).await.unwrap();

        let found = repo.get_by_username("justincase").await.unwrap().unwrap();
        assert_eq!(found.id().as_str(), "user-1");

        assert!(repo.get_by_username("JustInCase").await.unwrap().is_none());
        assert!(repo.username_exists("justincase").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let repo = repository();
        repo.create(user("user-1", "justincase")).await.unwrap();

        let result = repo.create(user("user-2", "justincase")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_renames_and_checks_conflicts() {
        let repo = repository();
        repo.create(user("user-1", "justincase")).await.unwrap();
        repo.create(user("user-2", "moviebuff")).await.unwrap();

        let mut renamed = repo.get(&UserId::new("user-1").unwrap()).await.unwrap().unwrap();
        renamed.set_username("justincase2");
        repo.update(renamed).await.unwrap();

        assert!(repo.get_by_username("justincase").await.unwrap().is_none());
        assert!(repo.get_by_username("justincase2").await.unwrap().is_some());

        let mut clash = repo.get(&UserId::new("user-2").unwrap()).await.unwrap().unwrap();
        clash.set_username("justincase2");
        let result = repo.update(clash).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_keep_username_unique() {
        let repo = Arc::new(repository());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(user(&format!("user-{}", i), "justincase")).await
                })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, DomainError::Conflict { .. })));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeping_own_username() {
        let repo = repository();
        repo.create(user("user-1", "justincase")).await.unwrap();

        let mut same = user("user-1", "justincase");
        same.set_email("new@example.com");
        let updated = repo.update(same).await.unwrap();

        assert_eq!(updated.email(), "new@example.com");
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let repo = repository();
        repo.create(user("user-1", "justincase")).await.unwrap();
        repo.create(user("user-2", "moviebuff")).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.delete(&UserId::new("user-1").unwrap()).await.unwrap());
        assert!(!repo.delete(&UserId::new("user-1").unwrap()).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
