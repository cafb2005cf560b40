pub mod memory;
pub mod mongo;

use std::fmt;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

pub use memory::MemoryItemStore;
pub use mongo::MongoStore;

/// Store-assigned opaque identifier for an item.
///
/// On the wire this is a 24 character lowercase hex string (a MongoDB
/// ObjectId). `parse` is the format validity predicate; whether an id
/// actually exists is a separate question answered by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub(crate) ObjectId);

impl ItemId {
    pub fn parse(s: &str) -> Result<Self, InvalidItemId> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidItemId(s.to_string()))
    }

    /// Generate a fresh identifier. Used by stores that assign ids locally.
    pub(crate) fn generate() -> Self {
        Self(ObjectId::new())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// The given string is not a syntactically valid item identifier.
#[derive(Debug, Error)]
#[error("invalid id format: {0}")]
pub struct InvalidItemId(pub String);

/// A stored item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

/// Store-layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database rejected or failed an operation.
    #[error("document store error: {0}")]
    Backend(#[from] mongodb::error::Error),

    /// A stored document did not have the expected shape.
    #[error("malformed document: {0}")]
    Malformed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Abstract persistence interface for the items collection.
///
/// Implementations must be thread-safe (Send + Sync) and support async
/// operations. Each method maps to a single atomic store call; no method
/// requires cross-call consistency with any other.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Inserts a new item with the given name and returns the assigned id.
    async fn insert(&self, name: &str) -> StoreResult<ItemId>;

    /// Returns all items in the store's natural order.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Deletes every item whose name matches exactly. Returns the count.
    async fn delete_by_name(&self, name: &str) -> StoreResult<u64>;

    /// Deletes the item with the given id, if present. Returns 0 or 1.
    async fn delete_by_id(&self, id: ItemId) -> StoreResult<u64>;

    /// Deletes every item. Returns the count, which may be zero.
    async fn delete_all(&self) -> StoreResult<u64>;
}
