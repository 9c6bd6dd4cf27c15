//! Store interfaces and reference implementations.
//!
//! The engine consumes two external services: a document database
//! ([`ContentStore`]) with per-collection CRUD and live subscriptions, and a
//! binary object store ([`AssetStore`]) with upload and URL resolution. Both
//! are traits; the in-memory and filesystem implementations here back tests
//! and local use, and a hosted-service implementation can be swapped in
//! without touching the engine.

pub mod asset;
pub mod content;
pub mod document;
pub mod error;
pub mod memory;
pub mod typed;

pub use asset::{AssetRef, AssetStore, FsAssetStore, MemoryAssetStore};
pub use content::ContentStore;
pub use document::{server_timestamp, Document, OrderBy};
pub use error::StoreError;
pub use memory::MemoryStore;
