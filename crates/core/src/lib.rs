//! Nexus domain core.
//!
//! Pure domain types and logic for the site engine: entities mirroring the
//! persisted document collections, the in-memory view state machine,
//! required-field validation, booking schedule math, and the static seed
//! catalog. This crate performs no I/O and has no async code; everything
//! here is directly unit-testable.

pub mod booking;
pub mod error;
pub mod experience;
pub mod identity;
pub mod message;
pub mod project;
pub mod schedule;
pub mod section;
pub mod seed;
pub mod types;
pub mod view;

pub use error::CoreError;
pub use section::{AdminPanel, Section};
pub use types::{DocId, Timestamp};
pub use view::{SubmitStatus, ViewState};
