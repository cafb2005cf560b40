use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

use crate::config::Config;
use crate::store::{Item, ItemId, ItemStore, StoreError, StoreResult};

/// MongoDB-backed item store.
///
/// Wraps a handle to the `items` collection of the configured database.
/// Cloning is cheap; the underlying client manages its own connection pool.
#[derive(Clone)]
pub struct MongoStore {
    items: Collection<Document>,
}

impl MongoStore {
    /// Create a store from configuration.
    ///
    /// The client connects lazily, so this succeeds even when the database
    /// is not yet reachable; individual operations will surface connection
    /// failures instead.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongo_uri)
            .await
            .context("Failed to create MongoDB client")?;

        let items = client
            .database(&config.db_name)
            .collection::<Document>("items");

        tracing::info!(
            "Using MongoDB database '{}' at {}",
            config.db_name,
            config.mongo_uri
        );

        Ok(Self { items })
    }
}

#[async_trait]
impl ItemStore for MongoStore {
    async fn insert(&self, name: &str) -> StoreResult<ItemId> {
        let result = self.items.insert_one(doc! { "name": name }).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Malformed(format!(
                "inserted_id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        tracing::debug!("Inserted item with id: {}", id.to_hex());
        Ok(ItemId(id))
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        let mut cursor = self
            .items
            .find(doc! {})
            .projection(doc! { "name": 1 })
            .await?;

        let mut items = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            let id = document
                .get_object_id("_id")
                .map_err(|_| StoreError::Malformed("document missing _id".to_string()))?;
            let name = document
                .get_str("name")
                .map_err(|_| StoreError::Malformed(format!("document {} missing name", id)))?;

            items.push(Item {
                id: ItemId(id),
                name: name.to_string(),
            });
        }

        Ok(items)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<u64> {
        let result = self.items.delete_many(doc! { "name": name }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_by_id(&self, id: ItemId) -> StoreResult<u64> {
        let result = self.items.delete_one(doc! { "_id": id.0 }).await?;
        Ok(result.deleted_count)
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = self.items.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
