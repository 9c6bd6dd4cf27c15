//! In-memory [`ContentStore`] reference implementation.
//!
//! Backs tests and local runs. Documents live in per-collection ordered
//! maps keyed by UUIDv7 ids, so plain map iteration equals creation order.
//! Every mutation republishes the affected collection and document
//! snapshots to their watchers.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;
use uuid::Uuid;

use nexus_core::DocId;

use crate::content::ContentStore;
use crate::document::{resolve_server_timestamps, Document, OrderBy};
use crate::error::StoreError;

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Reference content store holding everything in process memory.
///
/// The mutex guards synchronous map operations only; it is never held
/// across an await point.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, BTreeMap<DocId, Value>>,
    collection_watchers: Vec<CollectionWatcher>,
    document_watchers: Vec<DocumentWatcher>,
    writes: u64,
    fail_writes: bool,
}

struct CollectionWatcher {
    collection: String,
    order: Option<OrderBy>,
    sender: watch::Sender<Vec<Document>>,
}

struct DocumentWatcher {
    collection: String,
    id: DocId,
    sender: watch::Sender<Option<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes applied so far (creates, updates, sets, and
    /// effective deletes). Lets tests assert that a rejected submission
    /// never reached the store.
    pub fn write_count(&self) -> u64 {
        self.inner.lock().expect("store mutex poisoned").writes
    }

    /// When set, every subsequent write is rejected with
    /// [`StoreError::Backend`] without touching the data. Test affordance
    /// for exercising failure paths.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.lock().expect("store mutex poisoned").fail_writes = fail;
    }

    /// Current documents of a collection, in creation (id) order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        snapshot(&inner, collection, None)
    }

    fn apply_write(
        &self,
        collection: &str,
        mutate: impl FnOnce(&mut BTreeMap<DocId, Value>) -> Result<Option<DocId>, StoreError>,
    ) -> Result<Option<DocId>, StoreError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if inner.fail_writes {
            return Err(StoreError::Backend("injected write failure".into()));
        }

        let docs = inner.collections.entry(collection.to_string()).or_default();
        let changed = mutate(docs)?;
        if changed.is_some() {
            inner.writes += 1;
            publish(&mut inner, collection);
        }
        Ok(changed)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn create(&self, collection: &str, mut fields: Value) -> Result<DocId, StoreError> {
        resolve_server_timestamps(&mut fields);
        let id = Uuid::now_v7().to_string();
        let stored = id.clone();
        self.apply_write(collection, move |docs| {
            docs.insert(stored.clone(), fields);
            Ok(Some(stored))
        })?;
        tracing::debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, mut partial: Value) -> Result<(), StoreError> {
        resolve_server_timestamps(&mut partial);
        self.apply_write(collection, |docs| {
            let existing = docs.get_mut(id).ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
            merge_top_level(existing, partial);
            Ok(Some(id.to_string()))
        })?;
        Ok(())
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        mut fields: Value,
        merge: bool,
    ) -> Result<(), StoreError> {
        resolve_server_timestamps(&mut fields);
        self.apply_write(collection, |docs| {
            if merge {
                let existing = docs.entry(id.to_string()).or_insert_with(|| Value::Object(Default::default()));
                merge_top_level(existing, fields);
            } else {
                docs.insert(id.to_string(), fields);
            }
            Ok(Some(id.to_string()))
        })?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.apply_write(collection, |docs| {
            // Idempotent: deleting an absent document changes nothing.
            Ok(docs.remove(id).map(|_| id.to_string()))
        })?;
        Ok(())
    }

    async fn watch_collection(
        &self,
        collection: &str,
        order: Option<OrderBy>,
    ) -> watch::Receiver<Vec<Document>> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let initial = snapshot(&inner, collection, order.as_ref());
        let (sender, receiver) = watch::channel(initial);
        inner.collection_watchers.push(CollectionWatcher {
            collection: collection.to_string(),
            order,
            sender,
        });
        receiver
    }

    async fn watch_document(
        &self,
        collection: &str,
        id: &str,
    ) -> watch::Receiver<Option<Document>> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let initial = document_snapshot(&inner, collection, id);
        let (sender, receiver) = watch::channel(initial);
        inner.document_watchers.push(DocumentWatcher {
            collection: collection.to_string(),
            id: id.to_string(),
            sender,
        });
        receiver
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

fn snapshot(inner: &Inner, collection: &str, order: Option<&OrderBy>) -> Vec<Document> {
    let mut docs: Vec<Document> = inner
        .collections
        .get(collection)
        .map(|docs| {
            docs.iter()
                .map(|(id, fields)| Document {
                    id: id.clone(),
                    fields: fields.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    if let Some(order) = order {
        docs.sort_by(|a, b| order.compare(a, b));
    }
    docs
}

fn document_snapshot(inner: &Inner, collection: &str, id: &str) -> Option<Document> {
    inner
        .collections
        .get(collection)
        .and_then(|docs| docs.get(id))
        .map(|fields| Document {
            id: id.to_string(),
            fields: fields.clone(),
        })
}

fn publish(inner: &mut Inner, collection: &str) {
    inner.collection_watchers.retain(|w| !w.sender.is_closed());
    inner.document_watchers.retain(|w| !w.sender.is_closed());

    let inner = &*inner;
    for watcher in inner
        .collection_watchers
        .iter()
        .filter(|w| w.collection == collection)
    {
        let docs = snapshot(inner, collection, watcher.order.as_ref());
        let _ = watcher.sender.send(docs);
    }
    for watcher in inner
        .document_watchers
        .iter()
        .filter(|w| w.collection == collection)
    {
        let doc = document_snapshot(inner, collection, &watcher.id);
        let _ = watcher.sender.send(doc);
    }
}

/// Shallow-merge `incoming`'s top-level object keys into `existing`.
///
/// Non-object incoming values replace the document outright, matching the
/// loosest behavior of the backing services.
fn merge_top_level(existing: &mut Value, incoming: Value) {
    match (existing.as_object_mut(), incoming) {
        (Some(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        (_, incoming) => *existing = incoming,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
