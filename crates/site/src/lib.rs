//! The site engine: content sync, submission flows, and the admin session
//! composed over the store traits.
//!
//! Embedders construct a [`Site`] with a [`ContentStore`] and
//! [`AssetStore`] implementation plus a [`SiteConfig`], drive it through
//! its view and flow methods, and render from its read-model receivers.
//!
//! [`ContentStore`]: nexus_store::ContentStore
//! [`AssetStore`]: nexus_store::AssetStore

pub mod access;
pub mod admin;
pub mod config;
pub mod error;
pub mod logging;
pub mod site;
pub mod submit;
pub mod sync;

pub use access::{hash_access_code, AccessPolicy, HashedCode, StaticCode};
pub use admin::{AdminSession, DeleteTarget, PendingDelete, ProjectEditor};
pub use config::SiteConfig;
pub use error::SiteError;
pub use logging::init_tracing;
pub use site::Site;
pub use sync::ContentSync;
