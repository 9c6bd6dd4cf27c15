//! The content store trait: per-collection CRUD plus live subscriptions.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;

use nexus_core::DocId;

use crate::document::{Document, OrderBy};
use crate::error::StoreError;

/// A document database holding named collections of JSON documents.
///
/// Subscriptions are push-based: every [`watch_collection`] /
/// [`watch_document`] receiver carries the full current snapshot of its
/// target (never a diff) and is updated on every mutation that affects it.
/// A receiver obtained after writes have happened starts with the current
/// snapshot, not an empty one.
///
/// Writers requesting a creation time place the
/// [`server_timestamp`](crate::document::server_timestamp) sentinel in a
/// field; the store resolves it to the current UTC time when the write is
/// applied.
///
/// [`watch_collection`]: ContentStore::watch_collection
/// [`watch_document`]: ContentStore::watch_document
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert a new document and return its store-assigned id.
    async fn create(&self, collection: &str, fields: Value) -> Result<DocId, StoreError>;

    /// Merge `partial`'s top-level fields into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] when the document is absent.
    async fn update(&self, collection: &str, id: &str, partial: Value) -> Result<(), StoreError>;

    /// Upsert a document. With `merge = false` the fields replace the
    /// document wholesale; with `merge = true` they merge at the top level.
    async fn set(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
        merge: bool,
    ) -> Result<(), StoreError>;

    /// Delete a document. Deleting an absent document is a no-op.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Subscribe to a collection, optionally ordered by a field.
    async fn watch_collection(
        &self,
        collection: &str,
        order: Option<OrderBy>,
    ) -> watch::Receiver<Vec<Document>>;

    /// Subscribe to a single document; `None` while it does not exist.
    async fn watch_document(&self, collection: &str, id: &str)
        -> watch::Receiver<Option<Document>>;
}
