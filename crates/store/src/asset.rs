//! The asset store trait and its reference implementations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// AssetStore
// ---------------------------------------------------------------------------

/// Handle to an uploaded object, resolvable to a retrieval URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub path: String,
}

/// A binary object store accepting uploads under a path and resolving a
/// stable retrieval URL per object.
///
/// Uploading to an existing path overwrites it (last write wins, as the
/// backing services do); callers avoid collisions by prefixing keys with a
/// timestamp.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store `bytes` under `path` and return a handle to the object.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<AssetRef, StoreError>;

    /// Resolve the retrieval URL for an uploaded object.
    async fn download_url(&self, asset: &AssetRef) -> Result<String, StoreError>;
}

// ---------------------------------------------------------------------------
// MemoryAssetStore
// ---------------------------------------------------------------------------

/// In-memory asset store for tests. URLs use the `memory://` scheme.
#[derive(Default)]
pub struct MemoryAssetStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored payload for `path`, if any.
    pub fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("asset mutex poisoned")
            .get(path)
            .cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().expect("asset mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<AssetRef, StoreError> {
        self.objects
            .lock()
            .expect("asset mutex poisoned")
            .insert(path.to_string(), bytes.to_vec());
        Ok(AssetRef {
            path: path.to_string(),
        })
    }

    async fn download_url(&self, asset: &AssetRef) -> Result<String, StoreError> {
        Ok(format!("memory://{}", asset.path))
    }
}

// ---------------------------------------------------------------------------
// FsAssetStore
// ---------------------------------------------------------------------------

/// Filesystem asset store writing objects under a root directory. URLs use
/// the `file://` scheme and point at the absolute object path.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<AssetRef, StoreError> {
        let full = self.object_path(path);
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full, bytes).await?;
        tracing::debug!(path, size = bytes.len(), "Asset written");
        Ok(AssetRef {
            path: path.to_string(),
        })
    }

    async fn download_url(&self, asset: &AssetRef) -> Result<String, StoreError> {
        let full = self.object_path(&asset.path);
        Ok(format!("file://{}", full.display()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
