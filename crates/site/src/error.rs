use nexus_core::CoreError;
use nexus_store::StoreError;

/// Engine-level error: every failure a flow or admin operation can surface.
///
/// Failures are handled where the I/O call is made; the embedding layer
/// turns the returned error into its blocking notice. Nothing is retried
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
