//! Tracing subscriber setup for embedders that want the engine's default
//! logging.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize a global tracing subscriber honoring `RUST_LOG`, with a
/// crate-scoped default filter when the variable is unset.
///
/// Call at most once per process; embedders with their own subscriber
/// should skip this.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_site=debug,nexus_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
