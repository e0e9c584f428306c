//! Document store port
//!
//! An opaque key-value collection API. Documents are JSON objects
//! addressed by collection and id.

use artisan_domain::{CollectionName, Document};
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur during document store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found")]
    NotFound,

    #[error("Document body must be a JSON object")]
    InvalidDocument,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Collection-oriented document storage
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in a collection
    async fn list(&self, collection: CollectionName) -> Result<Vec<Document>, StoreError>;

    /// Insert a document under a fresh id and return it
    async fn create(
        &self,
        collection: CollectionName,
        fields: Map<String, Value>,
    ) -> Result<Document, StoreError>;

    async fn get(&self, collection: CollectionName, id: &str) -> Result<Document, StoreError>;

    /// Replace every field of an existing document
    async fn replace(
        &self,
        collection: CollectionName,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError>;

    /// Overwrite only the given top-level fields of an existing document
    async fn patch(
        &self,
        collection: CollectionName,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError>;

    async fn delete(&self, collection: CollectionName, id: &str) -> Result<(), StoreError>;
}

/// Require a JSON object body
pub fn into_fields(body: Value) -> Result<Map<String, Value>, StoreError> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::InvalidDocument),
    }
}
