//! Process-local document store
//!
//! Documents live for the lifetime of the process. Ids are random v4 UUIDs.

use artisan_application::{DocumentStore, StoreError};
use artisan_domain::{CollectionName, Document};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory [`DocumentStore`] keyed by collection, insertion-ordered within each
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<CollectionName, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `update` to the document with `id`, or fail with `NotFound`
    async fn update(
        &self,
        collection: CollectionName,
        id: &str,
        update: impl FnOnce(&mut Document),
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or(StoreError::NotFound)?;
        update(doc);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: CollectionName) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn create(
        &self,
        collection: CollectionName,
        fields: Map<String, Value>,
    ) -> Result<Document, StoreError> {
        let doc = Document::new(Uuid::new_v4().to_string(), fields);
        debug!(collection = %collection, id = %doc.id, "Document created");
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn get(&self, collection: CollectionName, id: &str) -> Result<Document, StoreError> {
        let collections = self.collections.read().await;
        collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn replace(
        &self,
        collection: CollectionName,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.update(collection, id, |doc| doc.fields = fields).await
    }

    async fn patch(
        &self,
        collection: CollectionName,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.update(collection, id, |doc| doc.merge(fields)).await
    }

    async fn delete(&self, collection: CollectionName, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(&collection)
            .ok_or(StoreError::NotFound)?;
        let index = docs
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::NotFound)?;
        docs.remove(index);
        debug!(collection = %collection, id, "Document deleted");
        Ok(())
    }
}
