/**
 * MongoDB User Store
 *
 * `UserStore` over a `users` collection. The driver's `Client` is pooled
 * and cheap to clone, so one instance is created at startup and shared by
 * every request.
 *
 * # Indexes
 *
 * `connect` creates a unique index on `username`; username uniqueness is
 * enforced here rather than in the handlers.
 */

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client, Collection, IndexModel,
};

use crate::backend::users::model::{NewUser, User, UserId};
use crate::backend::users::store::{StoreError, UserStore};

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// MongoDB duplicate key error code
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone, Debug)]
pub struct MongoUserStore {
    client: Client,
    users: Collection<User>,
}

impl MongoUserStore {
    /// Connect, verify the server answers a ping, and ensure indexes exist
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to MongoDB database '{}'", database);

        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!("MongoDB connection established");

        let store = Self {
            users: db.collection(USERS_COLLECTION),
            client,
        };
        store.ensure_indexes().await?;
        Ok(store)
    }

    /// Handle on the underlying client, used for shutdown
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Number of user documents; used by the connection diagnostic
    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.users.count_documents(doc! {}).await?)
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique_username = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users.create_index(unique_username).await?;
        tracing::debug!("Unique index on users.username ensured");
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.users.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let result = self
            .users
            .clone_with_type::<NewUser>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    StoreError::DuplicateUsername(user.username.clone())
                } else {
                    StoreError::Database(e)
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::UnexpectedId)?;
        Ok(user.with_id(id))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "username": username }).await?)
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one_and_delete(doc! { "_id": *id }).await?)
    }
}
