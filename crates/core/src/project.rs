//! Portfolio projects (`projects` collection).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DocId;

/// Collection name in the content store.
pub const COLLECTION: &str = "projects";

/// A portfolio case study.
///
/// `gallery` must be non-empty whenever the detail view with navigation is
/// shown; [`validate_draft`] enforces this before an admin save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DocId,
    pub title: String,
    #[serde(default)]
    pub stats: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: String,
}

/// Validate a project draft before it is written back in full.
///
/// A draft needs a non-empty title and at least one gallery image (the
/// detail view's circular navigation has no meaning over an empty gallery).
pub fn validate_draft(project: &Project) -> Result<(), CoreError> {
    if project.title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project title must not be empty".into(),
        ));
    }
    if project.gallery.is_empty() {
        return Err(CoreError::Validation(
            "Project gallery must contain at least one image".into(),
        ));
    }
    Ok(())
}
