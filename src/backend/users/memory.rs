/**
 * In-Memory User Store
 *
 * A `UserStore` kept in a `HashMap` behind a tokio `RwLock`. Used by the test
 * suite and for running the router without a database. Enforces the same
 * unique-username rule as the MongoDB index.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::backend::users::model::{NewUser, User, UserId};
use crate::backend::users::store::{StoreError, UserStore};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        // ObjectIds from one process increase monotonically
        all.sort_by_key(|user| user.id);
        Ok(all)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.username == user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        let stored = user.with_id(ObjectId::new());
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.username == username).cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.write().await.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            email: format!("{}@example.com", username),
            admin: false,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_finds() {
        let store = MemoryUserStore::new();
        let user = store.insert(new_user("dave")).await.unwrap();

        let by_id = store.find_by_id(&user.id).await.unwrap();
        assert_eq!(by_id.as_ref(), Some(&user));

        let by_name = store.find_by_username("dave").await.unwrap();
        assert_eq!(by_name, Some(user));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryUserStore::new();
        store.insert(new_user("erin")).await.unwrap();

        let result = store.insert(new_user("erin")).await;
        assert_matches!(result, Err(StoreError::DuplicateUsername(name)) if name == "erin");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let store = MemoryUserStore::new();
        for name in ["a1", "b2", "c3"] {
            store.insert(new_user(name)).await.unwrap();
        }
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|user| user.username)
            .collect();
        assert_eq!(names, vec!["a1", "b2", "c3"]);
    }

    #[tokio::test]
    async fn test_delete_returns_prior_document() {
        let store = MemoryUserStore::new();
        let user = store.insert(new_user("frank")).await.unwrap();

        assert_eq!(store.delete(&user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(store.delete(&user.id).await.unwrap(), None);
        assert_eq!(store.find_by_id(&user.id).await.unwrap(), None);
    }
}
